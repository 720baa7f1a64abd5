pub mod model_loader;
pub mod predictor;
pub mod recommendations;

pub use model_loader::load_predictor;
pub use predictor::{PlaceholderModel, Predictor, TrainedModel};
