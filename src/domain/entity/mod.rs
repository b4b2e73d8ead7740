pub mod iam;

use crate::base::ResourceID;

/// An entity exposes the identifier it is stored and looked up by.
pub trait Entity: ResourceID {
    fn ident(&self) -> &str;
}

macro_rules! state_ref {
    ($prop:ident, $rtrn:ty) => {
        pub fn $prop(&self) -> &$rtrn {
            &self.state.$prop
        }
    };
}

pub(self) use state_ref;
