//! Selection and preference flags shared by the `recommend` and `overlays`
//! subcommands.

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use nextplate_core::{District, PreferenceLevel, ScoreWeights, Selection, Selector};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::{
    ARG_CATEGORY, ARG_CITY, ARG_COMPETITORS, ARG_DATA_DIR, ARG_DISTRICT, ARG_POPULARITY,
    ARG_SATISFACTION, ARG_SUB_CATEGORY, CliError, DEFAULT_CITY, ENV_OVERLAYS_DATA_DIR,
    ENV_RECOMMEND_DATA_DIR,
};

/// CLI arguments for the `recommend` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Load the restaurant, cluster-center and district tables \
                 from a data directory, score every cluster in the selected \
                 scope and print the best and worst clusters as JSON. \
                 Selectors default to All; preference levels default to \
                 neutral.",
    about = "Rank the best and worst clusters for a new restaurant"
)]
#[ortho_config(prefix = "NEXTPLATE")]
pub(crate) struct RecommendArgs {
    /// Directory holding `restaurants.csv`, `cluster_centers.csv` and
    /// `districts.csv`.
    #[arg(long = ARG_DATA_DIR, value_name = "dir")]
    #[serde(default)]
    pub(crate) data_dir: Option<Utf8PathBuf>,
    /// District to rank within, or `All`.
    #[arg(long = ARG_DISTRICT, value_name = "name")]
    #[serde(default)]
    pub(crate) district: Option<String>,
    /// Macro-category, e.g. `Asian`, or `All`.
    #[arg(long = ARG_CATEGORY, value_name = "name")]
    #[serde(default)]
    pub(crate) category: Option<String>,
    /// Sub-category within the macro-category, e.g. `Thai`, or `All`.
    #[arg(long = ARG_SUB_CATEGORY, value_name = "name")]
    #[serde(default)]
    pub(crate) sub_category: Option<String>,
    /// Desired level of competition (very low .. very high).
    #[arg(long = ARG_COMPETITORS, value_name = "level")]
    #[serde(default)]
    pub(crate) competitors: Option<String>,
    /// Desired popularity of the area (very low .. very high).
    #[arg(long = ARG_POPULARITY, value_name = "level")]
    #[serde(default)]
    pub(crate) popularity: Option<String>,
    /// Desired customer satisfaction in the area (very low .. very high).
    #[arg(long = ARG_SATISFACTION, value_name = "level")]
    #[serde(default)]
    pub(crate) satisfaction: Option<String>,
}

impl RecommendArgs {
    pub(crate) fn into_config(self) -> Result<QueryConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        QueryConfig::resolve(merged, ENV_RECOMMEND_DATA_DIR, None)
    }
}

/// CLI arguments for the `overlays` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Run the same ranking as `recommend` and print the map \
                 view, a description of the scope and every thematic layer \
                 (overview, price level, review score, review count, best \
                 and worst locations) as renderer-neutral JSON records.",
    about = "Build map overlays for a selection"
)]
#[ortho_config(prefix = "NEXTPLATE")]
pub(crate) struct OverlaysArgs {
    /// Directory holding `restaurants.csv`, `cluster_centers.csv` and
    /// `districts.csv`.
    #[arg(long = ARG_DATA_DIR, value_name = "dir")]
    #[serde(default)]
    pub(crate) data_dir: Option<Utf8PathBuf>,
    /// District to rank within, or `All`.
    #[arg(long = ARG_DISTRICT, value_name = "name")]
    #[serde(default)]
    pub(crate) district: Option<String>,
    /// Macro-category, e.g. `Asian`, or `All`.
    #[arg(long = ARG_CATEGORY, value_name = "name")]
    #[serde(default)]
    pub(crate) category: Option<String>,
    /// Sub-category within the macro-category, e.g. `Thai`, or `All`.
    #[arg(long = ARG_SUB_CATEGORY, value_name = "name")]
    #[serde(default)]
    pub(crate) sub_category: Option<String>,
    /// Desired level of competition (very low .. very high).
    #[arg(long = ARG_COMPETITORS, value_name = "level")]
    #[serde(default)]
    pub(crate) competitors: Option<String>,
    /// Desired popularity of the area (very low .. very high).
    #[arg(long = ARG_POPULARITY, value_name = "level")]
    #[serde(default)]
    pub(crate) popularity: Option<String>,
    /// Desired customer satisfaction in the area (very low .. very high).
    #[arg(long = ARG_SATISFACTION, value_name = "level")]
    #[serde(default)]
    pub(crate) satisfaction: Option<String>,
    /// City name used in the scope description.
    #[arg(long = ARG_CITY, value_name = "name")]
    #[serde(default)]
    pub(crate) city: Option<String>,
}

impl OverlaysArgs {
    pub(crate) fn into_config(self) -> Result<QueryConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        let city = merged.city.clone();
        QueryConfig::resolve(merged.into(), ENV_OVERLAYS_DATA_DIR, city)
    }
}

impl From<OverlaysArgs> for RecommendArgs {
    fn from(args: OverlaysArgs) -> Self {
        Self {
            data_dir: args.data_dir,
            district: args.district,
            category: args.category,
            sub_category: args.sub_category,
            competitors: args.competitors,
            popularity: args.popularity,
            satisfaction: args.satisfaction,
        }
    }
}

/// Resolved query configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct QueryConfig {
    /// Directory holding the CSV tables.
    pub(crate) data_dir: Utf8PathBuf,
    /// District and category selectors.
    pub(crate) selection: Selection,
    /// Weights derived from the preference levels.
    pub(crate) weights: ScoreWeights,
    /// City named in scope descriptions.
    pub(crate) city: String,
}

impl QueryConfig {
    pub(crate) fn resolve(
        args: RecommendArgs,
        data_dir_env: &'static str,
        city: Option<String>,
    ) -> Result<Self, CliError> {
        let data_dir = args.data_dir.ok_or(CliError::MissingArgument {
            field: ARG_DATA_DIR,
            env: data_dir_env,
        })?;
        let selection = Selection {
            district: selector(args.district.as_deref()).map(District::new),
            category: selector(args.category.as_deref()),
            sub_category: selector(args.sub_category.as_deref()),
        };
        let weights = ScoreWeights::from_preferences(
            preference(args.competitors.as_deref(), ARG_COMPETITORS)?,
            preference(args.popularity.as_deref(), ARG_POPULARITY)?,
            preference(args.satisfaction.as_deref(), ARG_SATISFACTION)?,
        );
        Ok(Self {
            data_dir,
            selection,
            weights,
            city: city.unwrap_or_else(|| DEFAULT_CITY.to_owned()),
        })
    }

    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        require_directory(&self.data_dir, ARG_DATA_DIR)
    }
}

fn selector(raw: Option<&str>) -> Selector<String> {
    raw.map_or(Selector::All, Selector::<String>::parse)
}

fn preference(raw: Option<&str>, field: &'static str) -> Result<PreferenceLevel, CliError> {
    raw.map_or(Ok(PreferenceLevel::default()), |value| {
        value
            .parse()
            .map_err(|source| CliError::InvalidPreference { field, source })
    })
}

fn require_directory(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
    match nextplate_fs::dir_is_dir(path) {
        Ok(true) => Ok(()),
        Ok(false) => Err(CliError::DataDirNotDirectory {
            field,
            path: path.to_path_buf(),
        }),
        Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
            Err(CliError::MissingDataDir {
                field,
                path: path.to_path_buf(),
            })
        }
        Err(source) => Err(CliError::InspectDataDir {
            field,
            path: path.to_path_buf(),
            source,
        }),
    }
}

#[cfg(test)]
pub(crate) fn recommend_config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<QueryConfig, CliError> {
    let merged = RecommendArgs::merge_from_layers(layers).map_err(CliError::from)?;
    QueryConfig::resolve(merged, ENV_RECOMMEND_DATA_DIR, None)
}

#[cfg(test)]
pub(crate) fn overlays_config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<QueryConfig, CliError> {
    let merged = OverlaysArgs::merge_from_layers(layers).map_err(CliError::from)?;
    let city = merged.city.clone();
    QueryConfig::resolve(merged.into(), ENV_OVERLAYS_DATA_DIR, city)
}
