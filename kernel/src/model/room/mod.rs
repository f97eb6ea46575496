use crate::model::id::RoomId;

pub mod event;

#[derive(Debug, Clone)]
pub struct Room {
    pub room_id: RoomId,
    pub name: String,
    pub description: String,
    pub image_url: String,
    pub price: i64,
    pub available: bool,
}

#[derive(Debug, Default)]
pub struct RoomListOptions {
    pub min_price: Option<i64>,
    pub max_price: Option<i64>,
}

impl RoomListOptions {
    /// Inclusive price band to filter on. `None` means no filtering:
    /// both bounds absent or non-positive returns the full listing.
    pub fn price_band(&self) -> Option<(i64, i64)> {
        let min = self.min_price.unwrap_or(0);
        let max = self.max_price.unwrap_or(0);
        if min <= 0 && max <= 0 {
            return None;
        }
        let lower = min.max(0);
        let upper = if max <= 0 { i64::MAX } else { max };
        Some((lower, upper))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_or_non_positive_bounds_disable_filtering() {
        assert_eq!(RoomListOptions::default().price_band(), None);
        let zeroed = RoomListOptions {
            min_price: Some(0),
            max_price: Some(0),
        };
        assert_eq!(zeroed.price_band(), None);
        let negative = RoomListOptions {
            min_price: Some(-10),
            max_price: Some(-1),
        };
        assert_eq!(negative.price_band(), None);
    }

    #[test]
    fn both_bounds_form_an_inclusive_band() {
        let options = RoomListOptions {
            min_price: Some(50),
            max_price: Some(150),
        };
        assert_eq!(options.price_band(), Some((50, 150)));
    }

    #[test]
    fn a_single_bound_leaves_the_other_side_open() {
        let min_only = RoomListOptions {
            min_price: Some(50),
            max_price: None,
        };
        assert_eq!(min_only.price_band(), Some((50, i64::MAX)));

        let max_only = RoomListOptions {
            min_price: None,
            max_price: Some(150),
        };
        assert_eq!(max_only.price_band(), Some((0, 150)));
    }
}
