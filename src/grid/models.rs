use ratatui::style::Color;

/// 24-bit display color of a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const fn from_hex(hex: u32) -> Self {
        Self(
            ((hex >> 16) & 0xFF) as u8,
            ((hex >> 8) & 0xFF) as u8,
            (hex & 0xFF) as u8,
        )
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Color::Rgb(rgb.0, rgb.1, rgb.2)
    }
}

const PALETTE: [u32; 24] = [
    0xE57373, 0x81C784, 0x64B5F6, 0xFFB74D, 0xBA68C8, 0x4DB6AC,
    0xFF8A65, 0x90A4AE, 0xF06292, 0x7986CB, 0x4DD0E1, 0xFFD54F,
    0x8D6E63, 0x9575CD, 0x4FC3F7, 0x66BB6A, 0xFFCC02, 0xEC407A,
    0x42A5F5, 0x26A69A, 0xFF7043, 0x9CCC65, 0x26C6DA, 0xD4E157,
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub color: Rgb,
    pub label: String,
}

impl Item {
    pub fn new(color: Rgb, label: impl Into<String>) -> Self {
        Self {
            color,
            label: label.into(),
        }
    }
}

/// The fixed, ordered list of tiles. Identity is the position in `items`.
#[derive(Debug, Clone)]
pub struct ItemList {
    pub items: Vec<Item>,
}

impl ItemList {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    /// Default palette, labelled "1" through "24".
    pub fn default_palette() -> Self {
        let items = PALETTE
            .iter()
            .enumerate()
            .map(|(i, hex)| Item::new(Rgb::from_hex(*hex), (i + 1).to_string()))
            .collect();
        Self::new(items)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }
}
