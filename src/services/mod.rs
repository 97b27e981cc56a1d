// Highlight Saver services
// Services wrap the store and render the save affordance.

pub mod affordance_renderer;
pub mod extension_runtime;
pub mod persistence_gateway;
