//! Command implementations: load, rank and write JSON.

use std::io::Write;

use camino::Utf8Path;
use log::info;
use nextplate_core::{Dataset, DatasetSource, ScoreWeights};
use nextplate_data::{CsvDatasetSource, DatasetPaths};
use nextplate_overlay::{Overlays, describe_scope};
use nextplate_scorer::{LocationRecommender, RankedCluster};
use serde::Serialize;

use crate::CliError;
use crate::query::{OverlaysArgs, QueryConfig, RecommendArgs};

/// JSON payload printed by `recommend`.
#[derive(Debug, Serialize)]
pub(crate) struct RankingReport {
    /// Scope sentence, e.g. `"all Thai restaurants in Champel"`.
    pub(crate) scope: String,
    /// Weights the ranking used.
    pub(crate) weights: ScoreWeights,
    /// Number of restaurants matching the selection.
    pub(crate) restaurants: usize,
    /// Best clusters, highest score first.
    pub(crate) best: Vec<RankedCluster>,
    /// Worst clusters, lowest score first.
    pub(crate) worst: Vec<RankedCluster>,
}

pub(crate) fn run_recommend(args: RecommendArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = resolve(args.into_config()?)?;
    let dataset = load_dataset(&config.data_dir)?;
    let report = rank(&dataset, &config)?;
    write_json(writer, &report)
}

pub(crate) fn run_overlays(args: OverlaysArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = resolve(args.into_config()?)?;
    let dataset = load_dataset(&config.data_dir)?;
    let overlays = build_overlays(&dataset, &config)?;
    write_json(writer, &overlays)
}

fn resolve(config: QueryConfig) -> Result<QueryConfig, CliError> {
    config.validate_sources()?;
    Ok(config)
}

pub(crate) fn load_dataset(dir: &Utf8Path) -> Result<Dataset, CliError> {
    let source = CsvDatasetSource::new(DatasetPaths::in_dir(dir));
    let dataset = source
        .load()
        .map_err(|err| CliError::LoadDataset(Box::new(err)))?;
    info!("loaded dataset from {dir}");
    Ok(dataset)
}

pub(crate) fn rank(dataset: &Dataset, config: &QueryConfig) -> Result<RankingReport, CliError> {
    let recommendation =
        LocationRecommender::new(dataset).recommend(&config.selection, config.weights)?;
    Ok(RankingReport {
        scope: describe_scope(&config.selection, &config.city),
        weights: config.weights,
        restaurants: recommendation.filtered.len(),
        best: recommendation.best,
        worst: recommendation.worst,
    })
}

pub(crate) fn build_overlays(dataset: &Dataset, config: &QueryConfig) -> Result<Overlays, CliError> {
    let recommendation =
        LocationRecommender::new(dataset).recommend(&config.selection, config.weights)?;
    Ok(Overlays::build(
        dataset,
        &config.selection,
        &recommendation,
        &config.city,
    )?)
}

fn write_json<T: Serialize>(writer: &mut dyn Write, payload: &T) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(payload).map_err(CliError::SerialiseOutput)?;
    writer
        .write_all(rendered.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}
