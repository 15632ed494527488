/// AST (Abstract Syntax Tree) module
/// Contains the tree the parser builds
///
/// Submodules:
/// - ast: Node definitions, construction and rendering
pub mod ast;
