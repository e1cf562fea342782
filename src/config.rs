use clap::Parser;

#[derive(Parser, Clone)]
pub struct Config {
    #[clap(env, long, default_value = "development")]
    pub environment: String,

    /// Comma separated list of origins allowed to receive a CORS echo.
    #[clap(env, long, default_value = "https://amp.gmail.dev,https://mail.google.com")]
    pub origin_urls: String,

    #[clap(env, long, default_value = "Reservations")]
    pub reservations_table: String,

    /// Value sent back in the AMP-Access-Control-Allow-Source-Origin header.
    #[clap(env, long, default_value = "amp@gmail.dev")]
    pub amp_source_origin: String,

    #[clap(env, long, default_value_t = 3000)]
    pub port: u16,
}
