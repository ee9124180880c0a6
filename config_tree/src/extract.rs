//! Typed extraction of resolved trees.

use std::sync::Arc;

use figment::{
    Metadata, Profile, Provider,
    error::Error,
    value::{Dict, Map, Value as FigmentValue},
};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{Mapping, TreeError, TreeResult};

/// Deserialise a resolved tree into `T`.
///
/// # Errors
///
/// Returns [`crate::TreeError::Deserialize`] when the tree does not match `T`.
///
/// # Examples
///
/// ```rust
/// use config_tree::{DataType, build_map_lenient, from_tree};
/// use serde::Deserialize;
///
/// #[derive(Debug, Deserialize, PartialEq)]
/// struct Server { port: u16 }
/// #[derive(Debug, Deserialize, PartialEq)]
/// struct App { server: Server }
///
/// let tree = build_map_lenient(&["server", "port"], "8080", DataType::Int)?;
/// let app: App = from_tree(tree)?;
/// assert_eq!(app.server.port, 8080);
/// # Ok::<_, std::sync::Arc<config_tree::TreeError>>(())
/// ```
pub fn from_tree<T: DeserializeOwned>(tree: Mapping) -> TreeResult<T> {
    serde_json::from_value(Value::Object(tree)).map_err(|err| Arc::new(TreeError::from(err)))
}

/// Figment provider exposing a resolved tree.
///
/// Lets a tree take part in a larger Figment chain alongside file and
/// environment providers.
#[derive(Clone, Debug)]
pub struct TreeProvider {
    tree: Mapping,
    name: String,
    profile: Profile,
}

impl TreeProvider {
    /// Wrap `tree` for the default profile.
    #[must_use]
    pub fn new(tree: Mapping) -> Self {
        Self {
            tree,
            name: String::from("configuration tree"),
            profile: Profile::Default,
        }
    }

    /// Name reported in Figment metadata.
    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Emit values into `profile` instead of the default profile.
    #[must_use]
    pub fn profile<P: Into<Profile>>(mut self, profile: P) -> Self {
        self.profile = profile.into();
        self
    }
}

impl Provider for TreeProvider {
    fn metadata(&self) -> Metadata {
        Metadata::named(self.name.clone())
    }

    fn data(&self) -> Result<Map<Profile, Dict>, Error> {
        let Some(dict) = FigmentValue::serialize(&self.tree)?.into_dict() else {
            return Err(Error::from(String::from(
                "configuration tree did not serialise to a dictionary",
            )));
        };
        Ok(self.profile.collect(dict))
    }
}
