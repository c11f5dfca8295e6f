/// Runtime configuration, read from CLI flags or the environment.
#[derive(clap::Parser, Debug, Clone)]
pub struct Config {
    /// Address the HTTP server listens on.
    #[clap(long, env, default_value = "0.0.0.0:8000")]
    pub bind_address: String,

    /// Origin of the pipeline editor frontend, allowed through CORS.
    #[clap(long, env, default_value = "http://localhost:3000")]
    pub frontend_origin: String,
}
