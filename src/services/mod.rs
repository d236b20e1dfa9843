pub mod azure_openai;
pub mod model_client;
