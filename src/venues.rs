//! Venue classification: maps DBLP venue spellings to research areas.
//!
//! The configuration is a closed listing of the venues counted for each
//! area, including DBLP's duplicate and variant spellings of the same venue.
//! Adding a venue is a data change here, not a control-flow change.

use std::collections::HashMap;

/// Area → venue-name configuration.
///
/// Max three most selective venues per area for now. Variant spellings
/// reflect DBLP's own records (e.g. OSDI/SOSP alternate years and are
/// treated as one venue; USENIX ATC and USENIX Security each have two
/// spellings).
const AREA_VENUES: &[(&str, &[&str])] = &[
    ("plan", &["POPL", "PLDI"]),
    ("hpc", &["SC", "HPDC", "ICS"]),
    ("log", &["CAV", "CAV (1)", "CAV (2)", "LICS", "CSL-LICS"]),
    (
        "soft",
        &["ICSE", "ICSE (1)", "ICSE (2)", "SIGSOFT FSE", "ESEC/SIGSOFT FSE"],
    ),
    (
        "ops",
        &[
            "SOSP",
            "OSDI",
            "EuroSys",
            "USENIX Annual Technical Conference",
            "USENIX Annual Technical Conference, General Track",
        ],
    ),
    ("arch", &["ISCA", "MICRO", "ASPLOS"]),
    ("act", &["STOC", "FOCS", "SODA"]),
    ("comm", &["SIGCOMM", "INFOCOM", "NSDI"]),
    (
        "sec",
        &[
            "IEEE Symposium on Security and Privacy",
            "ACM Conference on Computer and Communications Security",
            "USENIX Security Symposium",
            "USENIX Security",
        ],
    ),
    (
        "mlmining",
        &["NIPS", "ICML", "ICML (1)", "ICML (2)", "ICML (3)", "KDD"],
    ),
    // AAAI/IAAI accounts for the joint conference years.
    ("ai", &["AAAI", "AAAI/IAAI", "IJCAI"]),
    ("mod", &["VLDB", "PVLDB", "SIGMOD Conference"]),
    // ACM Trans. Graph. is narrowed to SIGGRAPH proceedings by the
    // exception rules.
    ("graph", &["ACM Trans. Graph.", "SIGGRAPH"]),
    (
        "metrics",
        &[
            "SIGMETRICS",
            "SIGMETRICS/Performance",
            "POMACS",
            "IMC",
            "Internet Measurement Conference",
        ],
    ),
    ("ir", &["WWW", "SIGIR"]),
    ("chi", &["CHI", "UbiComp", "Ubicomp", "UIST", "IMWUT", "Pervasive"]),
    (
        "nlp",
        &[
            "EMNLP",
            "ACL",
            "ACL (1)",
            "ACL (2)",
            "NAACL",
            "HLT-NAACL",
            "ACL/IJCNLP",   // joint in 2009
            "COLING-ACL",   // joint in 1998
            "EMNLP-CoNLL",  // joint in 2012
            "HLT/EMNLP",    // joint in 2005
        ],
    ),
    (
        "vision",
        &[
            "CVPR",
            "CVPR (1)",
            "CVPR (2)",
            "ICCV",
            "ECCV",
            "ECCV (1)",
            "ECCV (2)",
            "ECCV (3)",
            "ECCV (4)",
            "ECCV (5)",
            "ECCV (6)",
            "ECCV (7)",
        ],
    ),
    ("mobile", &["MobiSys", "MobiCom", "MOBICOM", "SenSys"]),
    (
        "robotics",
        &[
            "ICRA",
            "ICRA (1)",
            "ICRA (2)",
            "IROS",
            "Robotics: Science and Systems",
        ],
    ),
    (
        "crypt",
        &[
            "CRYPTO",
            "CRYPTO (1)",
            "CRYPTO (2)",
            "CRYPTO (3)",
            "EUROCRYPT",
            "EUROCRYPT (1)",
            "EUROCRYPT (2)",
            "EUROCRYPT (3)",
        ],
    ),
    // ISMB proceedings appear as Bioinformatics special issues; the
    // exception rules pick out the right issues.
    (
        "bio",
        &[
            "RECOMB",
            "ISMB",
            "Bioinformatics",
            "ISMB/ECCB (Supplement of Bioinformatics)",
            "Bioinformatics [ISMB/ECCB]",
            "ISMB (Supplement of Bioinformatics)",
        ],
    ),
    ("da", &["ICCAD", "DAC"]),
    (
        "bed",
        &[
            "RTSS",
            "RTAS",
            "IEEE Real-Time and Embedded Technology and Applications Symposium",
            "EMSOFT",
        ],
    ),
    // TVCG is narrowed to IEEE Vis and VR proceedings by the exception rules.
    ("vis", &["IEEE Visualization", "VR", "IEEE Trans. Vis. Comput. Graph."]),
    ("ecom", &["EC", "WINE"]),
];

/// Finer-grained labels, defined only for a strict subset of venues.
const SUBAREA_VENUES: &[(&str, &str)] = &[
    ("AAAI", "aaai"),
    ("AAAI/IAAI", "aaai"),
    ("IJCAI", "ijcai"),
    ("CVPR", "cvpr"),
    ("CVPR (1)", "cvpr"),
    ("CVPR (2)", "cvpr"),
    ("ICCV", "iccv"),
    ("ECCV", "eccv"),
    ("ECCV (1)", "eccv"),
    ("ECCV (2)", "eccv"),
    ("ECCV (3)", "eccv"),
    ("ECCV (4)", "eccv"),
    ("ECCV (5)", "eccv"),
    ("ECCV (6)", "eccv"),
    ("ECCV (7)", "eccv"),
];

/// Lookup table from venue name to research area and optional subarea.
///
/// Built once at startup, read many times, never mutated afterwards. A
/// venue missing from the table is simply out of scope, not an error:
/// most corpus records fall outside the counted venues.
#[derive(Debug, Clone)]
pub struct VenueTable {
    areas: HashMap<&'static str, &'static str>,
    subareas: HashMap<&'static str, &'static str>,
}

impl VenueTable {
    /// Builds the table from the static area configuration.
    #[must_use]
    pub fn new() -> Self {
        let mut areas = HashMap::new();
        for (area, venues) in AREA_VENUES {
            for venue in *venues {
                areas.insert(*venue, *area);
            }
        }
        let subareas = SUBAREA_VENUES.iter().copied().collect();
        Self { areas, subareas }
    }

    /// Returns the research area for a venue, if the venue is counted.
    pub fn area(&self, venue: &str) -> Option<&'static str> {
        self.areas.get(venue).copied()
    }

    /// Returns the subarea label for a venue, or `""` when none is defined.
    pub fn subarea(&self, venue: &str) -> &'static str {
        self.subareas.get(venue).copied().unwrap_or("")
    }
}

impl Default for VenueTable {
    fn default() -> Self {
        Self::new()
    }
}
