use image::DynamicImage;

/// EXIF orientation tag values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    Normal,
    MirrorHorizontal,
    Rotate180,
    MirrorVertical,
    /// Mirrored about the top-left / bottom-right diagonal
    Transpose,
    Rotate90,
    /// Mirrored about the top-right / bottom-left diagonal
    Transverse,
    Rotate270,
}

impl Orientation {
    pub fn from_exif(value: u32) -> Option<Self> {
        Some(match value {
            1 => Self::Normal,
            2 => Self::MirrorHorizontal,
            3 => Self::Rotate180,
            4 => Self::MirrorVertical,
            5 => Self::Transpose,
            6 => Self::Rotate90,
            7 => Self::Transverse,
            8 => Self::Rotate270,
            _ => return None,
        })
    }

    /// Whether applying this orientation swaps width and height.
    pub fn swaps_axes(&self) -> bool {
        matches!(
            self,
            Self::Transpose | Self::Rotate90 | Self::Transverse | Self::Rotate270
        )
    }

    /// Rotate/flip `img` so it displays upright.
    pub fn apply(&self, img: DynamicImage) -> DynamicImage {
        match self {
            Self::Normal => img,
            Self::MirrorHorizontal => img.fliph(),
            Self::Rotate180 => img.rotate180(),
            Self::MirrorVertical => img.flipv(),
            Self::Transpose => img.rotate90().fliph(),
            Self::Rotate90 => img.rotate90(),
            Self::Transverse => img.rotate270().fliph(),
            Self::Rotate270 => img.rotate270(),
        }
    }
}

/// Read the primary image's orientation tag, if the container carries EXIF.
pub fn read_orientation(data: &[u8]) -> Orientation {
    let mut cursor = std::io::Cursor::new(data);
    exif::Reader::new()
        .read_from_container(&mut cursor)
        .ok()
        .and_then(|exif| {
            exif.get_field(exif::Tag::Orientation, exif::In::PRIMARY)
                .and_then(|field| field.value.get_uint(0))
        })
        .and_then(Orientation::from_exif)
        .unwrap_or_default()
}
