mod fake_model_client;

pub use fake_model_client::FakeModelClient;
