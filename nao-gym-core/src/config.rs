//! YAML configuration files.
use anyhow::Result;
use serde::{de::DeserializeOwned, Serialize};
use std::{
    fs::File,
    io::{BufReader, Write},
    path::Path,
};

/// Configuration that can be stored in and restored from a YAML file.
pub trait YamlConfig: Serialize + DeserializeOwned {
    /// Constructs the configuration from a YAML file.
    fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        let rdr = BufReader::new(file);
        let config = serde_yaml::from_reader(rdr)?;
        Ok(config)
    }

    /// Saves the configuration to a YAML file.
    fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut file = File::create(path)?;
        file.write_all(serde_yaml::to_string(&self)?.as_bytes())?;
        Ok(())
    }
}

impl<C: Serialize + DeserializeOwned> YamlConfig for crate::TimeLimitConfig<C> {}

/// An object built from a configuration.
pub trait Configurable {
    /// Configuration.
    type Config: Clone;

    /// Builds the object.
    fn build(config: &Self::Config) -> Result<Self>
    where
        Self: Sized;
}
