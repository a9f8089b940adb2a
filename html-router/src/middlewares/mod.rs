pub mod layers;
pub mod response_middleware;
