//! Command-line interface and the batch pipeline behind it

use crate::analysis::connectivity::{ConnectivityAnalyzer, ProbeLayout};
use crate::catalog::{Catalog, CatalogEntry, TileHasher, TileId, report};
use crate::io::configuration::{
    CATALOG_REPORT_FILE, DEFAULT_HASH_SECRET, DEFAULT_OUTPUT_DIR, EXPORT_SCALE, PipelineConfig,
    RULES_FILE, TILES_DIR,
};
use crate::io::discovery::collect_map_files;
use crate::io::error::{ProcessingError, Result, WithPath};
use crate::io::image::{export_tile_png, load_map_pixels};
use crate::io::progress::ProgressManager;
use crate::rules::{self, BookletWording};
use crate::spatial::{Dataset, Map, MapDecoder};
use crate::terrain::Palette;
use clap::Parser;
use log::{LevelFilter, info};
use rayon::prelude::*;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "dungeontiles")]
#[command(
    author,
    version,
    about = "Build a tile catalog and reveal rules from dungeon map images"
)]
/// Command-line arguments for the catalog tool
pub struct Cli {
    /// Map PNG file or directory of maps (searched recursively)
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Directory receiving the catalog, rules and tile images
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output: PathBuf,

    /// Secret keying the tile identity digest
    #[arg(short, long, default_value = DEFAULT_HASH_SECRET)]
    pub key: String,

    /// Tile id to treat as the starting point instead of detecting it
    #[arg(long, value_name = "ID")]
    pub start_tile: Option<String>,

    /// Skip writing tile images
    #[arg(long)]
    pub no_images: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Log per-file and per-tile detail
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Log level requested by the flags
    pub const fn log_level(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::Debug
        } else if self.quiet {
            LevelFilter::Warn
        } else {
            LevelFilter::Info
        }
    }

    /// Effective run settings
    pub fn to_config(&self) -> PipelineConfig {
        PipelineConfig {
            output_dir: self.output.clone(),
            secret: self.key.clone(),
            start_tile: self.start_tile.clone(),
            export_images: !self.no_images,
            show_progress: self.should_show_progress(),
            ..PipelineConfig::new(self.target.clone())
        }
    }
}

/// Counts describing one completed run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Maps decoded
    pub maps: usize,
    /// Distinct non-empty tiles
    pub distinct_tiles: usize,
    /// Physical tile copies needed
    pub total_tiles: usize,
    /// Tiles with a section in the rule script
    pub narrated_tiles: usize,
}

/// Runs discovery, decoding, cataloguing, export and rule generation
pub struct FileProcessor {
    config: PipelineConfig,
    palette: Palette,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a processor for the given settings
    pub fn new(config: PipelineConfig) -> Self {
        let progress_manager = config.show_progress.then(ProgressManager::new);

        Self {
            config,
            palette: Palette::default(),
            progress_manager,
        }
    }

    /// Create a processor from parsed command-line arguments
    pub fn from_cli(cli: &Cli) -> Self {
        Self::new(cli.to_config())
    }

    /// Process every map under the target and write all artifacts
    ///
    /// # Errors
    ///
    /// Returns the first decoding, catalog, rule or file-system error; no
    /// partial output is written after a failure
    pub fn process(&mut self) -> Result<RunSummary> {
        let files = collect_map_files(&self.config.target)?;
        info!("Decoding {} map image(s)", files.len());

        let dataset = self.decode_all(&files)?;
        let hasher = TileHasher::new(&self.config.secret);
        let start_override = self
            .config
            .start_tile
            .as_deref()
            .map(str::parse::<TileId>)
            .transpose()?;
        let catalog = Catalog::build(&dataset, &hasher, start_override)?;
        info!(
            "Catalogued {} distinct tile(s), {} copies in total",
            catalog.len(),
            catalog.total()
        );

        let analyzer =
            ConnectivityAnalyzer::new(&catalog, ProbeLayout::for_shape(self.config.tile_shape));
        let book = rules::generate(&dataset, &catalog, &analyzer)?;
        let rule_text = rules::render(&book, &BookletWording::default());

        self.create_output_dir()?;
        self.write_text(CATALOG_REPORT_FILE, &report::render(&catalog))?;
        self.write_text(RULES_FILE, &rule_text)?;
        if self.config.export_images {
            self.export_tiles(&catalog)?;
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(RunSummary {
            maps: dataset.len(),
            distinct_tiles: catalog.len(),
            total_tiles: catalog.total(),
            narrated_tiles: book.sections.len(),
        })
    }

    /// Decode map files concurrently into a path-ordered dataset
    ///
    /// # Errors
    ///
    /// Returns the first load or decode error, tagged with its file path
    pub fn decode_all(&mut self, files: &[PathBuf]) -> Result<Dataset> {
        let decoder = MapDecoder::new(
            self.config.map_shape,
            self.config.tile_shape,
            self.palette,
        );
        if let Some(ref mut pm) = self.progress_manager {
            pm.start_phase("decode", files.len());
        }
        let progress = self.progress_manager.as_ref();

        let decoded = files
            .par_iter()
            .map(|path| -> Result<(PathBuf, Map)> {
                let map = decode_file(&decoder, path)?;
                if let Some(pm) = progress {
                    pm.advance();
                }
                Ok((path.clone(), map))
            })
            .collect::<Result<Vec<_>>>()?;

        Dataset::new(decoded)
    }

    fn export_tiles(&mut self, catalog: &Catalog) -> Result<()> {
        let entries: Vec<(TileId, &CatalogEntry)> = catalog.entries().collect();
        if let Some(ref mut pm) = self.progress_manager {
            pm.start_phase("export", entries.len());
        }
        let progress = self.progress_manager.as_ref();
        let tiles_dir = self.config.output_dir.join(TILES_DIR);
        let palette = self.palette;

        entries.par_iter().try_for_each(|(id, entry)| -> Result<()> {
            let name = format!("{id}.png");
            export_tile_png(entry.tile(), &palette, 1, &tiles_dir.join("1x").join(&name))?;
            export_tile_png(
                entry.tile(),
                &palette,
                EXPORT_SCALE,
                &tiles_dir.join(format!("{EXPORT_SCALE}x")).join(&name),
            )?;
            if let Some(pm) = progress {
                pm.advance();
            }
            Ok(())
        })
    }

    fn create_output_dir(&self) -> Result<()> {
        let dir = &self.config.output_dir;
        std::fs::create_dir_all(dir).map_err(|e| ProcessingError::FileSystem {
            path: dir.clone(),
            operation: "create directory",
            source: e,
        })
    }

    fn write_text(&self, file_name: &str, contents: &str) -> Result<()> {
        let path = self.config.output_dir.join(file_name);
        std::fs::write(&path, contents).map_err(|e| ProcessingError::FileSystem {
            path: path.clone(),
            operation: "write",
            source: e,
        })?;
        info!("Wrote {}", path.display());
        Ok(())
    }
}

fn decode_file(decoder: &MapDecoder, path: &Path) -> Result<Map> {
    let buffer = load_map_pixels(path)?;
    log::debug!(
        "Decoding {} ({}x{} px)",
        path.display(),
        buffer.width,
        buffer.height
    );
    decoder.decode(&buffer.pixels, buffer.width).with_path(path)
}
