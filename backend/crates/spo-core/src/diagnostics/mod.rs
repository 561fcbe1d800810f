pub mod dependency_diagnostics;
