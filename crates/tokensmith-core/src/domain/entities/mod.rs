pub mod point;
pub mod scale_spec;
pub mod token;
pub mod tree;

pub use point::{NamedPoint, RawValue, ScalePoint};
pub use scale_spec::{Algorithm, ScaleSpec, ScaleSpecBuilder};
pub use token::{CompositeValue, NamedToken, Token, TokenValue, reference_path};
pub use tree::{TokenTree, TreeNode};
