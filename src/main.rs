use std::sync::Arc;

use clap::{Parser, Subcommand};
use color_eyre::eyre::{Result, bail};

use datakeep::app::template;
use datakeep::app::{Action, CatalogSession, Effect, SetupDialog, reduce};
use datakeep::domain::datastore::{DatastoreKind, DatastoreName};
use datakeep::error;
use datakeep::infra::adapters::TomlCatalogStore;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List registered datastores
    List,
    /// Show one datastore, secrets masked
    Show { name: String },
    /// Show the fields a kind's setup form expects
    Fields { kind: DatastoreKind },
    /// Register a datastore, running the full form pipeline
    Add {
        kind: DatastoreKind,
        /// Field values, one per flag
        #[arg(long = "set", value_name = "FIELD=VALUE")]
        set: Vec<String>,
        /// Replace the existing entry of this name instead of adding
        #[arg(long)]
        replaces: Option<String>,
    },
    /// Remove a datastore by name
    Remove { name: String },
}

fn main() -> Result<()> {
    error::install_hooks()?;
    let args = Args::parse();

    let store = Arc::new(TomlCatalogStore::new()?);
    let mut session = CatalogSession::open(store)?;

    match args.command {
        Command::List => {
            if session.catalog().is_empty() {
                println!("No datastores registered");
                return Ok(());
            }
            for config in session.catalog().iter() {
                println!(
                    "{}\t{}\t{}",
                    config.name,
                    config.kind(),
                    config.masked_endpoint()
                );
            }
        }
        Command::Show { name } => {
            let name = DatastoreName::new(name)?;
            let Some(config) = session.catalog().get(&name) else {
                bail!("Datastore not found: {name}");
            };
            println!("name:     {}", config.name);
            println!("kind:     {} ({})", config.kind(), config.kind().label());
            println!("endpoint: {}", config.masked_endpoint());
        }
        Command::Fields { kind } => {
            for field in template::fields_for(kind) {
                let requirement = if field.required { "required" } else { "optional" };
                let default = if field.default.is_empty() {
                    String::new()
                } else {
                    format!(" (default {})", field.default)
                };
                println!("{}\t{}\t{}{}", field.id, field.label, requirement, default);
            }
        }
        Command::Add {
            kind,
            set,
            replaces,
        } => {
            let mut dialog = match &replaces {
                Some(old) => {
                    let old_name = DatastoreName::new(old.as_str())?;
                    let Some(existing) = session.catalog().get(&old_name) else {
                        bail!("Datastore not found: {old_name}");
                    };
                    if existing.kind() != kind {
                        bail!(
                            "Datastore {old_name} is {}, not {kind}",
                            existing.kind()
                        );
                    }
                    SetupDialog::edit(existing)
                }
                None => SetupDialog::create(kind),
            };

            for pair in &set {
                let Some((field, value)) = pair.split_once('=') else {
                    bail!("Expected FIELD=VALUE, got {pair:?}");
                };
                if !dialog.set_field(field, value) {
                    bail!("Unknown field {field:?} for {kind}; see `datakeep fields {kind}`");
                }
            }

            if let Some(message) = dialog.last_outcome().message() {
                if !dialog.can_confirm() {
                    bail!("{message}");
                }
                eprintln!("warning: {message}");
            }

            let effects = reduce(&mut dialog, &Action::Confirm);
            if effects.is_empty() {
                match dialog.last_outcome().message() {
                    Some(message) => bail!("{message}"),
                    None => bail!("Form is incomplete; see `datakeep fields {kind}`"),
                }
            }
            for effect in effects {
                if let Effect::ShowError(message) = &effect {
                    bail!("{message}");
                }
                session.execute(effect)?;
            }
            println!("Registered datastore");
        }
        Command::Remove { name } => {
            let name = DatastoreName::new(name)?;
            let removed = session.remove(&name)?;
            println!("Removed {}", removed.name);
        }
    }

    Ok(())
}
