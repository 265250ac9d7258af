//! Command-line front end for the catalog store.
//!
//! Every subcommand opens the store over the configured data directory,
//! performs one operation and exits. Read commands print JSON; mutations
//! print a single `{success, message}` line and exit 1 when the store
//! rejected them. Logs go to stderr and are filtered through `RUST_LOG`.

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use pokedex::{
    ADDED_MESSAGE, ActionResult, CatalogStore, Config, DEFAULT_IMAGE, DELETED_MESSAGE, FileStorage,
    NewPokemon, PokemonId, PokemonPatch, PokemonTypeId, Stats, UPDATED_MESSAGE, image_url_or,
    open_file_store,
};
use serde::Serialize;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "pokedex")]
#[command(about = "Browse and edit the local Pokémon catalog")]
struct Cli {
    /// Data directory (defaults to $POKEDEX_DATA_DIR or ./.pokedex)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List records, optionally only those of one type
    List {
        #[arg(long = "type")]
        type_id: Option<u32>,
    },
    /// Show one record
    Show { id: String },
    /// List the static types
    Types,
    /// Create a record
    Add(AddArgs),
    /// Merge new values into an existing record
    Update(UpdateArgs),
    /// Delete a record (and its favorite entry)
    Delete { id: String },
    /// Star or unstar a record
    Favorite { id: String },
    /// List favorite records
    Favorites,
    /// Print the asset path for an image filename
    ImageUrl {
        file: Option<String>,
        /// Base path (defaults to $POKEDEX_BASE_URL or /)
        #[arg(long)]
        base: Option<String>,
        /// Image used when no filename is given
        #[arg(long, default_value = DEFAULT_IMAGE)]
        fallback: String,
    },
}

#[derive(Args, Debug)]
struct AddArgs {
    #[arg(long)]
    name: Option<String>,
    #[arg(long, allow_negative_numbers = true)]
    level: Option<i64>,
    /// Type id; repeat for multiple types
    #[arg(long = "type")]
    types: Vec<u32>,
    #[arg(long, default_value = "")]
    img: String,
    #[arg(long, default_value = "")]
    description: String,
    #[command(flatten)]
    stats: StatArgs,
}

/// Stat flags; on update, omitted ones keep the record's current value.
#[derive(Args, Debug)]
struct StatArgs {
    #[arg(long, allow_negative_numbers = true)]
    hp: Option<i64>,
    #[arg(long, allow_negative_numbers = true)]
    attack: Option<i64>,
    #[arg(long, allow_negative_numbers = true)]
    defense: Option<i64>,
    #[arg(long, allow_negative_numbers = true)]
    speed: Option<i64>,
}

impl StatArgs {
    fn is_empty(&self) -> bool {
        self.hp.is_none() && self.attack.is_none() && self.defense.is_none() && self.speed.is_none()
    }

    fn over(&self, base: Stats) -> Stats {
        Stats {
            hp: self.hp.unwrap_or(base.hp),
            attack: self.attack.unwrap_or(base.attack),
            defense: self.defense.unwrap_or(base.defense),
            speed: self.speed.unwrap_or(base.speed),
        }
    }
}

#[derive(Args, Debug)]
struct UpdateArgs {
    id: String,
    #[arg(long)]
    name: Option<String>,
    #[arg(long, allow_negative_numbers = true)]
    level: Option<i64>,
    /// Replacement type list; repeat for multiple types
    #[arg(long = "type")]
    types: Vec<u32>,
    #[arg(long)]
    img: Option<String>,
    #[arg(long)]
    description: Option<String>,
    #[command(flatten)]
    stats: StatArgs,
}

#[derive(Serialize)]
struct AddOutcome {
    #[serde(flatten)]
    result: ActionResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<PokemonId>,
}

#[derive(Serialize)]
struct FavoriteOutcome {
    #[serde(flatten)]
    result: ActionResult,
    favorite: bool,
}

fn main() {
    init_tracing();
    match run() {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(err) => {
            eprintln!("{err:#}");
            std::process::exit(1);
        }
    }
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Returns false when a mutation was rejected by the store.
fn run() -> Result<bool> {
    let cli = Cli::parse();
    let config = Config::from_env();
    let data_dir = cli.data_dir.unwrap_or(config.data_dir);
    let open = || open_file_store(&data_dir);

    match cli.command {
        Command::List { type_id } => {
            let store = open()?;
            match type_id {
                Some(type_id) => print_json(&store.pokemons_of_type(PokemonTypeId(type_id)))?,
                None => print_json(store.pokemons())?,
            }
        }
        Command::Show { id } => {
            let store = open()?;
            let id = PokemonId::from(id);
            let Some(pokemon) = store.pokemon_by_id(&id) else {
                bail!("no Pokémon with id {id}");
            };
            print_json(pokemon)?;
        }
        Command::Types => {
            let store = open()?;
            print_json(&store.types().iter().collect::<Vec<_>>())?;
        }
        Command::Add(args) => {
            let mut store = open()?;
            let result = store.add_pokemon(candidate_from_args(args));
            let outcome = AddOutcome {
                result: ActionResult::from_result(&result, ADDED_MESSAGE),
                id: result.ok(),
            };
            print_line(&outcome)?;
            return Ok(outcome.result.success);
        }
        Command::Update(args) => {
            let mut store = open()?;
            let current = store
                .pokemon_by_id(&PokemonId::from(args.id.as_str()))
                .map(|pokemon| pokemon.stats)
                .unwrap_or_default();
            let result = store.update_pokemon(patch_from_args(args, current));
            return report(ActionResult::from_result(&result, UPDATED_MESSAGE));
        }
        Command::Delete { id } => {
            let mut store = open()?;
            store.load_favorites();
            let result = store.delete_pokemon(&PokemonId::from(id));
            return report(ActionResult::from_result(&result, DELETED_MESSAGE));
        }
        Command::Favorite { id } => {
            let mut store = open()?;
            return toggle_favorite(&mut store, PokemonId::from(id));
        }
        Command::Favorites => {
            let mut store = open()?;
            store.load_favorites();
            print_json(&store.favorites())?;
        }
        Command::ImageUrl {
            file,
            base,
            fallback,
        } => {
            let base = base.unwrap_or(config.base_url);
            println!("{}", image_url_or(&base, file.as_deref(), &fallback));
        }
    }
    Ok(true)
}

fn candidate_from_args(args: AddArgs) -> NewPokemon {
    NewPokemon {
        id: None,
        name: args.name,
        types: args.types.into_iter().map(PokemonTypeId).collect(),
        level: args.level,
        img: args.img,
        description: args.description,
        stats: args.stats.over(Stats::default()),
    }
}

fn patch_from_args(args: UpdateArgs, current: Stats) -> PokemonPatch {
    let mut patch = PokemonPatch::new(PokemonId::from(args.id));
    patch.name = args.name;
    patch.level = args.level;
    patch.img = args.img;
    patch.description = args.description;
    if !args.types.is_empty() {
        patch.types = Some(args.types.into_iter().map(PokemonTypeId).collect());
    }
    if !args.stats.is_empty() {
        patch.stats = Some(args.stats.over(current));
    }
    patch
}

fn toggle_favorite(store: &mut CatalogStore<FileStorage>, id: PokemonId) -> Result<bool> {
    if store.pokemon_by_id(&id).is_none() {
        bail!("no Pokémon with id {id}");
    }
    store.load_favorites();
    let outcome = match store.toggle_favorite(&id) {
        Ok(true) => FavoriteOutcome {
            result: ActionResult::ok("Added to favorites"),
            favorite: true,
        },
        Ok(false) => FavoriteOutcome {
            result: ActionResult::ok("Removed from favorites"),
            favorite: false,
        },
        Err(err) => FavoriteOutcome {
            result: ActionResult::failed(&err),
            favorite: store.is_favorite_id(&id),
        },
    };
    print_line(&outcome)?;
    Ok(outcome.result.success)
}

fn report(outcome: ActionResult) -> Result<bool> {
    print_line(&outcome)?;
    Ok(outcome.success)
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let rendered = serde_json::to_string_pretty(value).context("rendering JSON output")?;
    println!("{rendered}");
    Ok(())
}

fn print_line<T: Serialize>(value: &T) -> Result<()> {
    let rendered = serde_json::to_string(value).context("rendering JSON output")?;
    println!("{rendered}");
    Ok(())
}
