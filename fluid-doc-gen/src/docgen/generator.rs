use crate::{
    docgen::rst::{Anchor, Directive, Header, BANNER},
    error::DocGenError,
    library::Library,
    object::Module,
    type_info::ObjectKind,
};
use anyhow::Result;
use std::io::Write;

/// Writes the API reference page of one module of a [Library]
///
/// Construction resolves the module and writes the banner and the title.
/// Then either [print_current_module](Self::print_current_module) or
/// [print_submodule](Self::print_submodule) (once per submodule) emits the items.
pub struct DocGenerator<'a, W: Write> {
    library: &'a Library,
    module: &'a Module,
    module_name: String,
    module_prefix: String,
    stream: W,
}

impl<'a, W: Write> DocGenerator<'a, W> {
    /// Empty `module_name` or `module_prefix` count as absent.
    ///
    /// Fails before writing anything if the module cannot be resolved
    /// or if the prefix is not a prefix of the module name.
    pub fn new(
        library: &'a Library,
        module_name: Option<&str>,
        module_prefix: Option<&str>,
        stream: W,
    ) -> Result<Self> {
        let module_name = module_name.filter(|name| !name.is_empty());
        let module_prefix = module_prefix.filter(|prefix| !prefix.is_empty());

        let module = library.resolve(module_name)?;
        let module_name = match module_name {
            Some(name) => format!("{}.{}", library.name, name),
            None => library.name.clone(),
        };
        let module_prefix = module_prefix.map(|prefix| format!("{}.{}", library.name, prefix));
        let header_name = header_name(&module_name, module_prefix.as_deref())?;
        let module_prefix = module_prefix.unwrap_or_else(|| module_name.clone());

        let mut generator = Self {
            library,
            module,
            module_name,
            module_prefix,
            stream,
        };
        generator.stream.write_all(BANNER.as_bytes())?;
        generator.print_header(&header_name, '=', true)?;
        Ok(generator)
    }

    pub fn module_name(&self) -> &str {
        &self.module_name
    }

    pub fn module_prefix(&self) -> &str {
        &self.module_prefix
    }

    pub fn into_inner(self) -> W {
        self.stream
    }

    /// Document a submodule of the resolved module under its own section
    pub fn print_submodule(&mut self, submodule_name: &str) -> Result<()> {
        let submodule = match self.module.getattr(submodule_name) {
            Some(object) => object.as_module().ok_or_else(|| {
                DocGenError::NotAModule(format!("{}.{}", self.module_name, submodule_name))
            })?,
            None => {
                return Err(DocGenError::SubmoduleNotFound(submodule_name.to_string()).into())
            }
        };
        self.print_section(submodule_name)?;
        for item in submodule.sorted_exports() {
            self.print_item(submodule, item)?;
        }
        Ok(())
    }

    pub fn print_current_module(&mut self) -> Result<()> {
        let module = self.module;
        for item in module.sorted_exports() {
            self.print_item(module, item)?;
        }
        Ok(())
    }

    pub fn print_section(&mut self, name: &str) -> Result<()> {
        self.print_header(name, '=', false)
    }

    /// Emit a block for `name` if `module` holds a class or a function under it
    pub fn print_item(&mut self, module: &Module, name: &str) -> Result<()> {
        let Some(item) = module.getattr(name) else {
            log::debug!("Skip `{name}`, {} has no such member", module.name);
            return Ok(());
        };
        match item.kind() {
            ObjectKind::Class => self.print_class(name),
            ObjectKind::Function => self.print_function(name),
            ObjectKind::Other => {
                log::debug!(
                    "Skip `{name}` of {}, neither a class nor a function",
                    module.name
                );
                Ok(())
            }
        }
    }

    pub fn print_class(&mut self, name: &str) -> Result<()> {
        self.print_ref(name)?;
        self.print_header(name, '-', false)?;
        let target = self.autodoc_target(name);
        write!(self.stream, "{}", Directive::AutoClass(&target))?;
        Ok(())
    }

    pub fn print_function(&mut self, name: &str) -> Result<()> {
        self.print_ref(name)?;
        self.print_header(name, '-', false)?;
        let target = self.autodoc_target(name);
        write!(self.stream, "{}", Directive::AutoFunction(&target))?;
        Ok(())
    }

    fn autodoc_target(&self, name: &str) -> String {
        match &self.library.package {
            Some(package) => format!("{package}.{}.{name}", self.module_prefix),
            None => format!("{}.{name}", self.module_prefix),
        }
    }

    fn print_header(&mut self, name: &str, rule: char, is_title: bool) -> Result<()> {
        let header = Header {
            name,
            rule,
            is_title,
        };
        write!(self.stream, "{header}")?;
        Ok(())
    }

    fn print_ref(&mut self, name: &str) -> Result<()> {
        let anchor = Anchor {
            prefix: &self.module_prefix,
            name,
        };
        write!(self.stream, "{anchor}")?;
        Ok(())
    }
}

/// Title of the page: what remains of `module_name` once `module_prefix` and the
/// following separator are cut, or the whole `module_name` if nothing remains
pub fn header_name(module_name: &str, module_prefix: Option<&str>) -> Result<String, DocGenError> {
    let Some(prefix) = module_prefix else {
        return Ok(module_name.to_string());
    };
    let Some(rest) = module_name.strip_prefix(prefix) else {
        return Err(DocGenError::PrefixMismatch {
            prefix: prefix.to_string(),
            module: module_name.to_string(),
        });
    };
    // drop the one character following the prefix, whatever its width
    let mut chars = rest.chars();
    chars.next();
    let diff = chars.as_str();
    if diff.is_empty() {
        Ok(module_name.to_string())
    } else {
        Ok(diff.to_string())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::library::LibraryBuilder;
    use test_case::test_case;

    fn fluid() -> Library {
        let mut builder = LibraryBuilder::new("fluid").package("paddle");
        let modules = [
            ("", vec!["Executor", "layers", "global_scope", "__version__"]),
            ("layers", vec!["nn", "io"]),
            // `dropout` is exported but never registered
            ("layers.nn", vec!["relu", "Linear", "EPSILON", "dropout"]),
            ("layers.io", vec!["data"]),
        ];
        for (path, all) in modules {
            let all = all.into_iter().map(str::to_string).collect();
            builder.add_module(path, Some(all)).unwrap();
        }
        let objects = [
            ("", "Executor", ObjectKind::Class),
            ("", "global_scope", ObjectKind::Function),
            ("", "__version__", ObjectKind::Other),
            ("layers.nn", "Linear", ObjectKind::Class),
            ("layers.nn", "relu", ObjectKind::Function),
            ("layers.nn", "EPSILON", ObjectKind::Other),
            ("layers.io", "data", ObjectKind::Function),
        ];
        for (module, name, kind) in objects {
            builder.add_object(module, name, kind).unwrap();
        }
        builder.build()
    }

    fn render(
        module: Option<&str>,
        prefix: Option<&str>,
        submodules: Option<&[&str]>,
    ) -> Result<String> {
        let library = fluid();
        let mut generator = DocGenerator::new(&library, module, prefix, Vec::new())?;
        match submodules {
            Some(submodules) => {
                for submodule in submodules {
                    generator.print_submodule(submodule)?;
                }
            }
            None => generator.print_current_module()?,
        }
        Ok(String::from_utf8(generator.into_inner())?)
    }

    #[test_case("fluid.layers", None, "fluid.layers" ; "no prefix")]
    #[test_case("fluid.layers", Some("fluid"), "layers" ; "parent prefix")]
    #[test_case("fluid.layers.nn", Some("fluid.layers"), "nn" ; "nested")]
    #[test_case("fluid.layers", Some("fluid.layers"), "fluid.layers" ; "prefix equals module")]
    #[test_case("fluid.layers", Some("fluid.lay"), "rs" ; "prefix off a dot boundary")]
    #[test_case("fluid.layers", Some("fluid.layer"), "fluid.layers" ; "nothing left after separator")]
    #[test_case("fluid.ébauche", Some("fluid."), "bauche" ; "multi-byte separator")]
    #[test_case("fluid.couche_é", Some("fluid.couche_"), "fluid.couche_é" ; "multi-byte last character")]
    fn test_header_name(module: &str, prefix: Option<&str>, expected: &str) {
        assert_eq!(header_name(module, prefix).unwrap(), expected);
    }

    #[test]
    fn test_header_name_mismatch() {
        assert_eq!(
            header_name("fluid.layers", Some("fluid.io")),
            Err(DocGenError::PrefixMismatch {
                prefix: "fluid.io".to_string(),
                module: "fluid.layers".to_string(),
            })
        );
        assert!(header_name("fluid", Some("fluid.layers")).is_err());
    }

    #[test]
    fn test_current_module() -> Result<()> {
        let out = render(Some("layers.nn"), None, None)?;
        insta::assert_snapshot!(out, @r###"
        ..  THIS FILE IS GENERATED BY `gen_doc.{py|sh}`
            !DO NOT EDIT THIS FILE MANUALLY!

        ===============
        fluid.layers.nn
        ===============

        .. _api_fluid_layers_nn_Linear:

        Linear
        ------

        ..  autoclass:: paddle.fluid.layers.nn.Linear
            :members:
            :noindex:

        .. _api_fluid_layers_nn_relu:

        relu
        ----

        ..  autofunction:: paddle.fluid.layers.nn.relu
            :noindex:
        "###);
        Ok(())
    }

    #[test]
    fn test_submodules_with_prefix() -> Result<()> {
        let out = render(Some("layers"), Some("layers"), Some(&["io", "nn"][..]))?;
        insta::assert_snapshot!(out, @r###"
        ..  THIS FILE IS GENERATED BY `gen_doc.{py|sh}`
            !DO NOT EDIT THIS FILE MANUALLY!

        ============
        fluid.layers
        ============

        io
        ==

        .. _api_fluid_layers_data:

        data
        ----

        ..  autofunction:: paddle.fluid.layers.data
            :noindex:

        nn
        ==

        .. _api_fluid_layers_Linear:

        Linear
        ------

        ..  autoclass:: paddle.fluid.layers.Linear
            :members:
            :noindex:

        .. _api_fluid_layers_relu:

        relu
        ----

        ..  autofunction:: paddle.fluid.layers.relu
            :noindex:
        "###);
        Ok(())
    }

    #[test]
    fn test_root_module() -> Result<()> {
        let out = render(None, None, None)?;
        let expected = [
            BANNER,
            "=====\nfluid\n=====\n\n",
            ".. _api_fluid_Executor:\n\n",
            "Executor\n--------\n\n",
            "..  autoclass:: paddle.fluid.Executor\n    :members:\n    :noindex:\n\n",
            ".. _api_fluid_global_scope:\n\n",
            "global_scope\n------------\n\n",
            "..  autofunction:: paddle.fluid.global_scope\n    :noindex:\n\n",
        ]
        .concat();
        assert_eq!(out, expected);
        Ok(())
    }

    #[test]
    fn test_title_stripped_by_prefix() -> Result<()> {
        let out = render(Some("layers.nn"), Some("layers"), Some(&[] as &[&str]))?;
        assert_eq!(out, format!("{BANNER}==\nnn\n==\n\n"));
        Ok(())
    }

    #[test]
    fn test_empty_strings_are_absent() -> Result<()> {
        assert_eq!(render(Some(""), Some(""), None)?, render(None, None, None)?);
        Ok(())
    }

    #[test]
    fn test_idempotent() -> Result<()> {
        let first = render(Some("layers"), None, Some(&["nn", "io"][..]))?;
        let second = render(Some("layers"), None, Some(&["nn", "io"][..]))?;
        assert_eq!(first, second);
        Ok(())
    }

    #[test]
    fn test_prefix_mismatch_writes_nothing() {
        let library = fluid();
        let mut out = Vec::new();
        let err = DocGenerator::new(&library, Some("layers"), Some("io"), &mut out)
            .err()
            .unwrap();
        assert!(matches!(
            err.downcast_ref::<DocGenError>(),
            Some(DocGenError::PrefixMismatch { .. })
        ));
        assert!(out.is_empty());
    }

    #[test]
    fn test_missing_module() {
        let library = fluid();
        let err = DocGenerator::new(&library, Some("layers.rnn"), None, Vec::new())
            .err()
            .unwrap();
        assert_eq!(err.to_string(), "Cannot find fluid.layers.rnn");
    }

    #[test]
    fn test_missing_submodule() -> Result<()> {
        let library = fluid();
        let mut generator = DocGenerator::new(&library, Some("layers"), None, Vec::new())?;
        generator.print_submodule("io")?;
        let before = generator.into_inner();

        let mut generator = DocGenerator::new(&library, Some("layers"), None, Vec::new())?;
        generator.print_submodule("io")?;
        let err = generator.print_submodule("rnn").unwrap_err();
        assert_eq!(
            err.downcast_ref::<DocGenError>(),
            Some(&DocGenError::SubmoduleNotFound("rnn".to_string()))
        );
        // nothing is written for the missing submodule
        assert_eq!(generator.into_inner(), before);
        Ok(())
    }

    #[test]
    fn test_submodule_must_be_a_module() -> Result<()> {
        let library = fluid();
        let mut generator = DocGenerator::new(&library, None, None, Vec::new())?;
        let err = generator.print_submodule("Executor").unwrap_err();
        assert_eq!(err.to_string(), "fluid.Executor is not a module");
        Ok(())
    }

    #[test]
    fn test_accessors() -> Result<()> {
        let library = fluid();
        let generator =
            DocGenerator::new(&library, Some("layers.nn"), Some("layers"), Vec::new())?;
        assert_eq!(generator.module_name(), "fluid.layers.nn");
        assert_eq!(generator.module_prefix(), "fluid.layers");
        Ok(())
    }
}
