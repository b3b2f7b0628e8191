use anyhow::Result;
use plankwise::{plan, PlanOptions, RoomDocument};
use std::path::PathBuf;
use tracing::{info, warn};

pub struct PlanArgs {
    pub room: PathBuf,
    pub output: Option<PathBuf>,
    pub seed: Option<u64>,
    pub no_shuffle: bool,
    pub relayout: bool,
    pub config: Option<PathBuf>,
    pub schedule: bool,
}

pub fn run(args: PlanArgs) -> Result<()> {
    let (config, document) = super::load_room(&args.room, args.config.as_deref())?;

    let mut options = PlanOptions::from_config(&config);
    options.shuffle &= !args.no_shuffle;
    options.seed = args.seed.or(options.seed);
    options.relayout = args.relayout;
    if args.seed.is_some() && !options.shuffle {
        warn!("Shuffling is off, --seed has no effect");
    }

    let name = if document.metadata.name.is_empty() {
        args.room
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default()
    } else {
        document.metadata.name.clone()
    };
    let created = document.metadata.created;

    let room = plan(document, &options)?;

    let mut planned = RoomDocument::from_room(name, &room);
    planned.metadata.created = created;

    let schedule = args
        .schedule
        .then(|| room.cutting_schedule().to_text(config.precision));

    match &args.output {
        Some(path) => {
            planned.save_to_file(path)?;
            info!("Wrote planned room to {}", path.display());
            if let Some(schedule) = schedule {
                print!("{}", schedule);
            }
        }
        None => {
            println!("{}", planned.to_json()?);
            // stdout carries the room file
            if let Some(schedule) = schedule {
                eprint!("{}", schedule);
            }
        }
    }

    Ok(())
}
