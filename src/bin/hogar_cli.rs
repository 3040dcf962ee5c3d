use hogar_core::{
    cli::{env_formatter, run_cli},
    init,
};

fn main() {
    init();

    if let Err(err) = run_cli() {
        tracing::error!(error = %err, "inventory run failed");
        eprintln!("{}", env_formatter().error_text(&err));
        std::process::exit(1);
    }
}
