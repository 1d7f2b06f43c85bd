//! lockdown-cli
//! ============
//!
//! Command-line interface for the `lockdown-core` pipeline.
//!
//! This crate primarily provides a binary (`lockdown`). The library target
//! only carries this overview so the crate documentation renders.
//!
//! Quick start
//! -----------
//!
//! ```text
//! lockdown --help
//! lockdown table.txt                 # writes lockdowns.json
//! lockdown parse table.txt           # offline, one outcome per line
//! lockdown resolve "Ivory Coast"
//! lockdown countries
//! ```
//!
//! For programmatic access to the parser, resolver and enrichment client,
//! use the `lockdown-core` crate directly.
#![cfg_attr(docsrs, feature(doc_cfg))]
