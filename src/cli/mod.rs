//! Command-line entry point: argument parsing and command dispatch.

pub mod output;
pub mod report;

use std::{
    env,
    ffi::OsString,
    path::{Path, PathBuf},
};

use crate::{
    config::{Config, ConfigManager},
    errors::CliError,
    inventory::predefined_house,
    utils::persistence::{load_inventory_report, save_or_report},
};

use output::Formatter;
use report::render_report;

pub const BIN_NAME: &str = "hogar_cli";

/// Commands accepted by the CLI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Build the predefined house, print it, and write the JSON snapshot.
    Report,
    /// Print a snapshot previously written by [`Command::Report`].
    Load(PathBuf),
    /// Write the effective configuration to the config file.
    Configure,
    Help,
    Version,
}

/// Parses arguments (without the program name). Paths may be any OS string;
/// command names must be UTF-8.
pub fn parse_args<I, S>(args: I) -> Result<Command, CliError>
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
{
    let mut args = args.into_iter().map(Into::into);
    let first = args.next().map(utf8_arg).transpose()?;
    let command = match first.as_deref() {
        None | Some("reporte") => Command::Report,
        Some("cargar") => {
            let path = args
                .next()
                .ok_or_else(|| CliError::Input("`cargar` requires a snapshot path".into()))?;
            Command::Load(PathBuf::from(path))
        }
        Some("configurar") => Command::Configure,
        Some("ayuda" | "--help" | "-h") => Command::Help,
        Some("version" | "--version" | "-V") => Command::Version,
        Some(other) => {
            return Err(CliError::Input(format!(
                "unknown command `{other}` (try `{BIN_NAME} ayuda`)"
            )))
        }
    };
    if let Some(extra) = args.next() {
        return Err(CliError::Input(format!(
            "unexpected argument `{}`",
            extra.to_string_lossy()
        )));
    }
    Ok(command)
}

fn utf8_arg(arg: OsString) -> Result<String, CliError> {
    arg.into_string().map_err(|raw| {
        CliError::Input(format!(
            "argument `{}` is not valid UTF-8",
            raw.to_string_lossy()
        ))
    })
}

/// Runs the CLI against the process arguments and environment.
pub fn run_cli() -> Result<(), CliError> {
    let command = parse_args(env::args_os().skip(1))?;
    let manager = ConfigManager::from_env();
    let config = manager.load()?.with_overrides(|key| env::var(key).ok());
    run_command(command, &config, &manager)
}

/// Formatter for messages printed before or without a loaded config file.
pub fn env_formatter() -> Formatter {
    Formatter::new(&Config::default().with_overrides(|key| env::var(key).ok()))
}

pub fn run_command(
    command: Command,
    config: &Config,
    manager: &ConfigManager,
) -> Result<(), CliError> {
    let formatter = Formatter::new(config);
    tracing::debug!(?command, "dispatching command");
    match command {
        Command::Report => run_report(config, &formatter),
        Command::Load(path) => run_load(&path, &formatter),
        Command::Configure => {
            manager.save(config)?;
            println!(
                "{}",
                formatter.success_text(format!(
                    "Configuración guardada en {}",
                    manager.path().display()
                ))
            );
            Ok(())
        }
        Command::Help => {
            println!("{}", help_text());
            Ok(())
        }
        Command::Version => {
            println!("{}", version_text());
            Ok(())
        }
    }
}

fn run_report(config: &Config, formatter: &Formatter) -> Result<(), CliError> {
    let house = predefined_house();
    let report = house.inventory_report();
    formatter.print_lines(&render_report(&report, formatter));

    let path = &config.output_path;
    if !save_or_report(&report, path) {
        return Err(CliError::SnapshotNotSaved(path.clone()));
    }
    println!();
    println!(
        "{}",
        formatter.success_text(format!("Inventario guardado en {}", path.display()))
    );
    println!(
        "{}",
        formatter.success_text("Inventario procesado exitosamente!")
    );
    Ok(())
}

fn run_load(path: &Path, formatter: &Formatter) -> Result<(), CliError> {
    let report = match load_inventory_report(path) {
        Ok(report) => report,
        Err(err) => {
            println!(
                "{}",
                formatter.warning_text(format!("No se pudo cargar {}", path.display()))
            );
            return Err(err.into());
        }
    };
    formatter.print_lines(&render_report(&report, formatter));
    Ok(())
}

pub fn help_text() -> String {
    format!(
        "Uso: {BIN_NAME} [COMANDO]\n\n\
         Comandos:\n  \
         reporte         Genera el inventario predefinido y guarda el JSON (por defecto)\n  \
         cargar <ruta>   Muestra un inventario guardado previamente\n  \
         configurar      Guarda la configuración efectiva en el archivo de configuración\n  \
         ayuda           Muestra esta ayuda\n  \
         version         Muestra la versión y los datos de compilación\n\n\
         Variables de entorno:\n  \
         HOGAR_CORE_CONFIG   Ruta del archivo de configuración\n  \
         HOGAR_CORE_HOME     Directorio base (por defecto ~/.hogar_core)\n  \
         HOGAR_CORE_OUTPUT   Ruta del JSON generado\n  \
         HOGAR_CORE_PLAIN    Desactiva colores e iconos\n  \
         RUST_LOG            Filtro de logs"
    )
}

pub fn version_text() -> String {
    format!(
        "{BIN_NAME} {} ({} {}, {})\ntarget: {} ({})\n{}",
        env!("CARGO_PKG_VERSION"),
        env!("HOGAR_CORE_BUILD_HASH"),
        env!("HOGAR_CORE_BUILD_STATUS"),
        env!("HOGAR_CORE_BUILD_TIMESTAMP"),
        env!("HOGAR_CORE_BUILD_TARGET"),
        env!("HOGAR_CORE_BUILD_PROFILE"),
        env!("HOGAR_CORE_BUILD_RUSTC"),
    )
}
