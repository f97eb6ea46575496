use kernel::model::id::RoomId;
use kernel::model::room::Room;

#[derive(sqlx::FromRow)]
pub struct RoomRow {
    pub room_id: RoomId,
    pub name: String,
    pub description: String,
    pub image_url: String,
    pub price: i64,
    pub available: bool,
}

impl From<RoomRow> for Room {
    fn from(value: RoomRow) -> Self {
        let RoomRow {
            room_id,
            name,
            description,
            image_url,
            price,
            available,
        } = value;
        Room {
            room_id,
            name,
            description,
            image_url,
            price,
            available,
        }
    }
}
