/// Issues sequential string ids for a single store.
///
/// The generator remembers the highest numeric id it has ever issued or observed, so an
/// id stays retired once handed out, even after its record is removed from the store.
#[derive(Debug, Default, Clone)]
pub struct IdGenerator {
    last: u64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the generator from ids already present in a store. Non-numeric ids are ignored.
    pub fn from_existing<'a, I>(ids: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut generator = Self::new();
        for id in ids {
            generator.observe(id);
        }
        generator
    }

    pub fn observe(&mut self, id: &str) {
        if let Ok(id) = id.parse::<u64>() {
            self.last = self.last.max(id);
        }
    }

    pub fn next_id(&mut self) -> String {
        self.last += 1;
        self.last.to_string()
    }
}
