//! A miniature `fluid` library whose public surface is registered for documentation.

use fluid_doc_gen::{define_library_gatherer, derive::*, export_module};

define_library_gatherer!(library, "fluid", package = "paddle");

export_module!(
    "",
    ["Executor", "Program", "global_scope", "layers", "__version__"]
);

#[gen_doc_object(name = "__version__")]
pub const VERSION: &str = "1.5.0";

/// Runs a [Program] on a device
#[gen_doc_class]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Executor {
    pub place: String,
}

/// A list of operators
#[gen_doc_class]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program {
    pub ops: Vec<String>,
}

/// Name of the scope shared by every executor
#[gen_doc_function]
pub fn global_scope() -> &'static str {
    "__global__"
}

pub mod layers {
    use super::*;

    export_module!("layers", ["nn", "io", "ops"]);

    pub mod nn {
        use super::*;

        // `dropout` is exported without being registered
        export_module!(
            "layers.nn",
            ["fc", "Linear", "conv2d", "relu", "EPSILON", "dropout"]
        );

        #[gen_doc_object(module = "layers.nn")]
        pub const EPSILON: f32 = 1e-5;

        #[gen_doc_class(module = "layers.nn")]
        #[derive(Debug, Clone, PartialEq)]
        pub struct Linear {
            pub weight: Vec<Vec<f32>>,
        }

        /// Fully connected layer
        #[gen_doc_function(module = "layers.nn")]
        pub fn fc(input: &[f32], size: usize) -> Vec<f32> {
            input.iter().copied().cycle().take(size).collect()
        }

        #[gen_doc_function(module = "layers.nn")]
        pub fn conv2d(input: &[f32], filter_size: usize) -> Vec<f32> {
            input.windows(filter_size).map(|w| w.iter().sum()).collect()
        }

        #[gen_doc_function(module = "layers.nn", name = "relu")]
        pub fn relu_f32(x: f32) -> f32 {
            x.max(0.0)
        }
    }

    pub mod io {
        use super::*;

        export_module!("layers.io", ["data", "DataFeeder"]);

        #[gen_doc_function(module = "layers.io")]
        pub fn data(name: &str, shape: &[usize]) -> String {
            format!("{name}{shape:?}")
        }

        #[gen_doc_class(module = "layers.io")]
        #[derive(Debug, Clone, Default)]
        pub struct DataFeeder {
            pub feed_list: Vec<String>,
        }
    }

    /// No `__all__`: every member not starting with `_` is exported
    pub mod ops {
        use super::*;

        #[gen_doc_function(module = "layers.ops")]
        pub fn sigmoid(x: f32) -> f32 {
            1.0 / (1.0 + (-x).exp())
        }

        #[gen_doc_function(module = "layers.ops")]
        pub fn exp(x: f32) -> f32 {
            x.exp()
        }

        #[gen_doc_function(module = "layers.ops", name = "_elementwise")]
        pub fn elementwise(x: &[f32], f: fn(f32) -> f32) -> Vec<f32> {
            x.iter().copied().map(f).collect()
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_layers() {
        assert_eq!(layers::nn::relu_f32(-1.0), 0.0);
        assert_eq!(layers::nn::conv2d(&[1.0, 2.0, 3.0], 2), vec![3.0, 5.0]);
        assert_eq!(layers::io::data("x", &[2, 3]), "x[2, 3]");
        assert_eq!(global_scope(), "__global__");
    }
}
