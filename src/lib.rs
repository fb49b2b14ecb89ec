//! MAC Matcher - hot-reloadable MAC (EUI-48) address sets for Rust
//!
//! This library answers "is this hardware address in the configured set?"
//! for traffic-classification rule chains:
//! - O(1) hash lookups on canonical 6-byte keys
//! - Atomic, all-or-nothing replacement of a set while readers keep running
//! - Groups combining inline literals with any number of provider-backed sets
//! - File-backed providers with optional automatic reload
//!
//! # Example
//!
//! ```rust
//! use macaddr_matcher::{batch_load_provider, DataManager, DataProvider, MacMatcher};
//!
//! let mut dm = DataManager::new();
//! let lan = dm.add_provider(DataProvider::new(
//!     "lan",
//!     "# office devices\n66:77:88:99:aa:bb\n",
//! ));
//!
//! let group = batch_load_provider(&["00:11:22:33:44:55", "provider:lan"], &dm).unwrap();
//! assert!(group.matches(&[0x00, 0x11, 0x22, 0x33, 0x44, 0x55]));
//! assert!(group.matches(&[0x66, 0x77, 0x88, 0x99, 0xaa, 0xbb]));
//!
//! // Provider updates are picked up without rebuilding the group
//! lan.set_data("cc:dd:ee:ff:00:11\n");
//! assert!(!group.matches(&[0x66, 0x77, 0x88, 0x99, 0xaa, 0xbb]));
//!
//! // Detach from the provider
//! group.close().unwrap();
//! ```
//!
//! # Entry Syntax
//!
//! | Entry | Example | Description |
//! |-------|---------|-------------|
//! | Colon | `aa:bb:cc:dd:ee:ff` | Six colon-separated pairs |
//! | Hyphen | `AA-BB-CC-DD-EE-FF` | Six hyphen-separated pairs |
//! | Dot | `aabb.ccdd.eeff` | Three dot-separated groups |
//! | Provider | `provider:lan` | Newline-delimited list from a data provider |
//!
//! Provider text allows blank lines and `#` comment lines.

pub mod error;
pub mod load;
pub mod matcher;
pub mod parser;
pub mod provider;
pub mod types;

// Re-export commonly used items
pub use error::{ErrorKind, MatcherError, Result};
pub use load::{batch_load_provider, build_group, SourceEntry, PROVIDER_PREFIX};
pub use matcher::{DynamicMatcher, MacMatcher, MacSet, MatcherGroup, WriteableMatcher};
pub use parser::{batch_load, load_from_reader, load_from_text, parse_mac, parse_text_mac_file};
pub use provider::{DataListener, DataManager, DataProvider};
#[cfg(feature = "async")]
pub use provider::spawn_auto_reload;
pub use types::{MacAddr, MAC_LEN};
