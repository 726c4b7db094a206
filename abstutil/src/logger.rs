/// Intercept messages using the `log` crate and print them to STDERR. The default filter is
/// `info`; set `RUST_LOG` to see per-frame detail, e.g. `RUST_LOG=blindspot=debug`.
pub fn setup() {
    use env_logger::{Builder, Env};
    Builder::from_env(Env::default().default_filter_or("info")).init();
}

