use serde::{Deserialize, Deserializer, Serialize};

/// Top-level save document, as read from and written to disk.
///
/// Every field is required. The document keeps the player list shape of the
/// older save format even though a session only ever has one player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveDef {
    pub map_size: usize,
    pub player: Vec<PlayerDef>,
}

/// Player state plus the flattened map the player lives in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerDef {
    pub name: String,
    /// Grid position written as `"x,y"`.
    pub current_location: String,
    pub power: i64,
    pub health: i64,
    pub equipment: Vec<GemDef>,
    pub locations: Vec<LocationDef>,
}

/// One grid cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationDef {
    pub x: usize,
    pub y: usize,
    pub name: String,
    pub description: String,
    #[serde(deserialize_with = "flag")]
    pub barrier: bool,
    /// May be `null`, but the key itself must be present.
    #[serde(deserialize_with = "required_nullable")]
    pub barrier_color: Option<String>,
    pub enemies: Vec<EnemyDef>,
    pub gems: Vec<GemDef>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnemyDef {
    pub name: String,
    pub health: i64,
    pub power: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GemDef {
    pub name: String,
    pub color: String,
}

/// Parse a `"x,y"` grid coordinate. Whitespace around either number is tolerated.
///
/// ```
/// use gridquest_data::parse_coordinate;
///
/// assert_eq!(parse_coordinate("1,2"), Some((1, 2)));
/// assert_eq!(parse_coordinate("1, 2"), Some((1, 2)));
/// assert_eq!(parse_coordinate("1;2"), None);
/// assert_eq!(parse_coordinate("-1,2"), None);
/// ```
pub fn parse_coordinate(raw: &str) -> Option<(usize, usize)> {
    let (x, y) = raw.split_once(',')?;
    Some((x.trim().parse().ok()?, y.trim().parse().ok()?))
}

/// Format a grid coordinate the way the save file stores it (no spaces).
pub fn format_coordinate(x: usize, y: usize) -> String {
    format!("{x},{y}")
}

/// Accept either a JSON boolean or an integer (non-zero = true).
fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawFlag {
        Bool(bool),
        Int(i64),
    }

    Ok(match RawFlag::deserialize(deserializer)? {
        RawFlag::Bool(value) => value,
        RawFlag::Int(value) => value != 0,
    })
}

// A plain `Option` field would be filled with `None` when the key is absent.
fn required_nullable<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer)
}
