use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tracing::debug;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Dinosaur {
    pub id: String,
    pub img_src: String,
    pub description: String,
    pub name: String,
    pub length: String,
}

pub type Db = Arc<Vec<Dinosaur>>;

const SEED: &[(&str, &str, &str, &str)] = &[
    (
        "Tyrannosaurus",
        "12m",
        "tyrannosaurus",
        "A large bipedal predator of the Late Cretaceous with a massive skull and tiny arms.",
    ),
    (
        "Triceratops",
        "9m",
        "triceratops",
        "A herbivore with three facial horns and a broad bony frill.",
    ),
    (
        "Brachiosaurus",
        "22m",
        "brachiosaurus",
        "A long-necked sauropod whose front legs were longer than its hind legs.",
    ),
    (
        "Stegosaurus",
        "9m",
        "stegosaurus",
        "A plated herbivore with a spiked tail from the Late Jurassic.",
    ),
    (
        "Velociraptor",
        "2m",
        "velociraptor",
        "A small feathered dromaeosaurid with a sickle-shaped claw on each foot.",
    ),
];

/// The bundled dataset served by the binary, in display order.
pub fn seed_dinosaurs() -> Vec<Dinosaur> {
    SEED.iter()
        .enumerate()
        .map(|(i, (name, length, slug, description))| Dinosaur {
            id: (i + 1).to_string(),
            img_src: format!("images/{slug}.jpg"),
            description: description.to_string(),
            name: name.to_string(),
            length: length.to_string(),
        })
        .collect()
}

pub fn app(dinosaurs: Vec<Dinosaur>) -> Router {
    let db: Db = Arc::new(dinosaurs);
    Router::new()
        .route("/dinosaurs", get(list_dinosaurs))
        .with_state(db)
}

pub fn app_with_seed() -> Router {
    app(seed_dinosaurs())
}

pub async fn run(listener: TcpListener, dinosaurs: Vec<Dinosaur>) -> Result<(), std::io::Error> {
    axum::serve(listener, app(dinosaurs)).await
}

async fn list_dinosaurs(State(db): State<Db>) -> Json<Vec<Dinosaur>> {
    debug!(count = db.len(), "serving dinosaur list");
    Json(db.to_vec())
}
