//! Relationship parts (`*.rels`).

/// Relationship type URIs.
pub mod rel_type {
    pub const OFFICE_DOCUMENT: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument";
    pub const IMAGE: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/image";
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relationship {
    pub id: String,
    pub rel_type: String,
    pub target: String,
}

/// Ordered relationship set. Ids are `rId1`, `rId2`, ... and never reused.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Relationships {
    rels: Vec<Relationship>,
    next_id: usize,
}

impl Relationships {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a relationship under a freshly allocated id.
    pub fn add(&mut self, rel_type: &str, target: &str) -> &Relationship {
        self.next_id += 1;
        self.rels.push(Relationship {
            id: format!("rId{}", self.next_id),
            rel_type: rel_type.to_string(),
            target: target.to_string(),
        });
        &self.rels[self.rels.len() - 1]
    }

    pub fn get(&self, id: &str) -> Option<&Relationship> {
        self.rels.iter().find(|rel| rel.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Relationship> {
        self.rels.iter()
    }

    pub fn len(&self) -> usize {
        self.rels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rels.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_sequential_and_distinct() {
        let mut rels = Relationships::new();
        let a = rels.add(rel_type::IMAGE, "media/image1.png").id.clone();
        let b = rels.add(rel_type::IMAGE, "media/image1.png").id.clone();
        assert_eq!(a, "rId1");
        assert_eq!(b, "rId2");
        assert_eq!(rels.len(), 2);
        assert_eq!(rels.get("rId2").unwrap().target, "media/image1.png");
        assert!(rels.get("rId3").is_none());
    }
}
