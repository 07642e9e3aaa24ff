//! Scene records - one entry per stage of the walk home.

use serde::Serialize;

/// File name of the scene configuration inside the resources directory.
pub const SCENES_CONFIG_FILE: &str = "scenes_config.json";

/// Obstacle kinds a scene can spawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Obstacle {
    Bike,
    Trash,
    Cart,
    Stand,
    Car,
    Cone,
    Child,
}

/// Configuration for a single scene, consumed by the game's scene manager.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneRecord {
    pub name: String,

    /// Length of the scene in seconds.
    pub duration: u32,

    /// Obstacle scroll speed in pixels per second.
    pub base_speed: u32,

    /// Obstacle density from 0.0 to 1.0.
    pub density: f64,

    /// Obstacle kinds the scene spawns.
    pub obstacles: Vec<Obstacle>,

    pub description: String,
}

impl SceneRecord {
    /// Create a scene record. Values are stored as given.
    pub fn new(
        name: impl Into<String>,
        duration: u32,
        base_speed: u32,
        density: f64,
        obstacles: &[Obstacle],
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            duration,
            base_speed,
            density,
            obstacles: obstacles.to_vec(),
            description: description.into(),
        }
    }
}

/// The four scenes of the game, in play order.
pub fn default_scenes() -> Vec<SceneRecord> {
    vec![
        SceneRecord::new(
            "安静小区",
            15,
            100,
            0.6,
            &[Obstacle::Bike, Obstacle::Trash],
            "清晨的小区街道，行人稀少",
        ),
        SceneRecord::new(
            "早市街道",
            20,
            150,
            0.8,
            &[Obstacle::Bike, Obstacle::Cart, Obstacle::Stand],
            "热闹的早市，摊位林立",
        ),
        SceneRecord::new(
            "商业区",
            15,
            200,
            1.0,
            &[Obstacle::Car, Obstacle::Bike, Obstacle::Cone],
            "繁忙的商业区，车流密集",
        ),
        SceneRecord::new(
            "学校门口",
            10,
            120,
            0.7,
            &[Obstacle::Bike, Obstacle::Child],
            "放学时的校门口，孩子们嬉戏",
        ),
    ]
}
