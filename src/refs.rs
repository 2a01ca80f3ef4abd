use pdf_writer::Ref;
use std::collections::HashMap;

/// Every kind of indirect object a calendar document writes
#[derive(Eq, PartialEq, Hash, Copy, Clone, Debug)]
pub enum RefType {
    Catalog,
    Info,
    PageTree,
    Page(usize),
    ContentForPage(usize),
    Font(usize),
    CidFont(usize),
    ToUnicode(usize),
    FontDescriptor(usize),
    FontData(usize),
}

/// Hands out sequential object ids and remembers which object each one belongs to, so
/// objects written later (page resources, the catalog) can refer back to earlier ones.
pub struct ObjectReferences {
    refs: HashMap<RefType, Ref>,
    next_id: i32,
}

impl ObjectReferences {
    pub fn new() -> ObjectReferences {
        ObjectReferences {
            refs: HashMap::new(),
            next_id: 1,
        }
    }

    pub fn get(&self, ref_type: RefType) -> Option<Ref> {
        self.refs.get(&ref_type).copied()
    }

    /// Allocate the id for an object, or return the one already allocated
    pub fn gen(&mut self, ref_type: RefType) -> Ref {
        if let Some(id) = self.get(ref_type) {
            return id;
        }
        let id = Ref::new(self.next_id);
        self.next_id += 1;
        self.refs.insert(ref_type, id);
        id
    }
}
