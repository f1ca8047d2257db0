use std::io::ErrorKind;

use async_trait::async_trait;
use tokio::process::Command;

use crate::error::{Error, Result};

/// Shows an image inline in the terminal.
#[async_trait]
pub trait AvatarDisplay: Send + Sync {
    async fn show(&self, image_url: &str) -> Result<()>;
}

/// Displays the avatar through kitty's `kitten icat`, in a 20x20 cell box at
/// the left edge, two rows down.
#[derive(Debug, Clone)]
pub struct KittyIcat {
    program: String,
    place: String,
}

impl KittyIcat {
    pub fn new() -> Self {
        Self {
            program: "kitten".to_string(),
            place: "20x20@0x2".to_string(),
        }
    }

    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            ..Self::new()
        }
    }

    pub fn args<'a>(&'a self, image_url: &'a str) -> Vec<&'a str> {
        vec![
            "icat",
            "--align",
            "left",
            "--scale-up",
            "--place",
            self.place.as_str(),
            image_url,
        ]
    }
}

impl Default for KittyIcat {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AvatarDisplay for KittyIcat {
    async fn show(&self, image_url: &str) -> Result<()> {
        tracing::debug!("Running {} icat for {}", self.program, image_url);

        let status = match Command::new(&self.program)
            .args(self.args(image_url))
            .status()
            .await
        {
            Ok(status) => status,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(Error::MissingDependency {
                    program: self.program.clone(),
                });
            }
            Err(e) => return Err(e.into()),
        };

        if !status.success() {
            tracing::warn!("{} icat exited with {}", self.program, status);
        }

        Ok(())
    }
}
