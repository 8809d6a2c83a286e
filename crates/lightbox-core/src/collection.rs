/// Identity of a displayable image, captured by the scanner at scan time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageDescriptor {
    pub src: String,
    pub alt: String,
}

/// Ordered list of images discoverable within one content view.
///
/// Insertion order is document order. A collection is rebuilt from scratch
/// whenever the underlying content changes; it is never patched in place.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Collection {
    images: Vec<ImageDescriptor>,
}

impl Collection {
    pub fn new(images: Vec<ImageDescriptor>) -> Self {
        Self { images }
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ImageDescriptor> {
        self.images.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ImageDescriptor> {
        self.images.iter()
    }
}

impl FromIterator<ImageDescriptor> for Collection {
    fn from_iter<I: IntoIterator<Item = ImageDescriptor>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
