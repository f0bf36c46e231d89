pub mod gnews;

pub use gnews::GNewsAdapter;
