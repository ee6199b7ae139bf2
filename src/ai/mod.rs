pub mod client;

use async_trait::async_trait;

pub use client::{ClaudeClient, RECIPE_ERROR_TEXT};

#[async_trait]
pub trait RecipeGenerator: Send + Sync {
    /// Produces recipe text for a photo of ingredients.
    ///
    /// Never fails: any model or transport problem yields
    /// [`RECIPE_ERROR_TEXT`] so the caller always has something to send.
    async fn generate_recipe(&self, image: &[u8]) -> String;
}
