//! Test helpers that lay out CSV tables in a temporary data directory.

use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;

const RESTAURANT_HEADER: &str = "place_id,name,price_level_combined,user_ratings_total,\
combined_rating,geometry.location.lat,geometry.location.lng,main_category,\
combined_main_category,combined_main_category_2,district,district_cluster";

/// Two Champel clusters and one Cité-Centre cluster, three restaurants each
/// except the quiet Champel cluster `c2`.
const RESTAURANT_ROWS: &[&str] = &[
    "a1,Da Mario,3,400,4.6,46.190,6.150,restaurant,\"Italian, Pizza\",European,Champel,c1",
    "a2,Luigi,2,380,4.7,46.191,6.151,restaurant,Italian,European,Champel,c1",
    "a3,Le Coq,4,350,4.5,46.190,6.152,restaurant,French,European,Champel,c1",
    "b1,Sala Thai,2,20,3.8,46.185,6.160,restaurant,Thai,Asian,Champel,c2",
    "c1,Bistro,3,120,4.1,46.204,6.145,restaurant,French,European,Cité-Centre,c3",
    "c2,Tokyo,3,90,4.2,46.205,6.146,restaurant,Japanese,Asian,Cité-Centre,c3",
    "c3,Napoli,1,60,4.0,46.204,6.147,restaurant,Italian,European,Cité-Centre,c3",
];

const CLUSTER_CENTERS: &str = "district_cluster,cluster_lat,cluster_lng\n\
c1,46.190,6.151\nc2,46.185,6.160\nc3,46.204,6.146\n";

const DISTRICTS: &str = "district,district_lat,district_lng,zoom\n\
All,46.200,6.143,13.4\nChampel,46.190,6.155,14.4\nCité-Centre,46.204,6.145,15.4\n";

/// Temporary data directory holding the three tables.
#[derive(Debug)]
pub(super) struct DataFiles {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl DataFiles {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = nextplate_fs::utf8_path(dir.path().to_path_buf()).expect("utf-8 tempdir");
        let mut restaurants = String::from(RESTAURANT_HEADER);
        for row in RESTAURANT_ROWS {
            restaurants.push('\n');
            restaurants.push_str(row);
        }
        restaurants.push('\n');
        for (name, contents) in [
            ("restaurants.csv", restaurants.as_str()),
            ("cluster_centers.csv", CLUSTER_CENTERS),
            ("districts.csv", DISTRICTS),
        ] {
            std::fs::write(root.join(name), contents).expect("write table");
        }
        Self { _dir: dir, root }
    }

    pub(super) fn root(&self) -> &Utf8Path {
        &self.root
    }

    pub(super) fn file(&self, name: &str) -> Utf8PathBuf {
        self.root.join(name)
    }
}
