use crate::core::palettes::errors::PaletteError;
use crate::core::palettes::kinds::PaletteKind;
use crate::core::palettes::palette::Palette;
use tracing::debug;

/// Every palette, synthesised once up front and addressed by index.
#[derive(Debug, Clone, PartialEq)]
pub struct PaletteCatalog {
    palettes: Vec<Palette>,
}

impl PaletteCatalog {
    pub fn build() -> Result<Self, PaletteError> {
        let palettes = PaletteKind::ALL
            .iter()
            .map(|kind| Palette::build(*kind))
            .collect::<Result<Vec<_>, _>>()?;

        debug!(count = palettes.len(), "palette catalog built");

        Ok(Self { palettes })
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Palette> {
        self.palettes.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.palettes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.palettes.is_empty()
    }

    /// The index after `index`, wrapping to 0.
    #[must_use]
    pub fn next_index(&self, index: usize) -> usize {
        if self.palettes.is_empty() {
            return 0;
        }

        (index + 1) % self.palettes.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Palette> {
        self.palettes.iter()
    }
}
