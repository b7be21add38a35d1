use std::fmt;

/// Deferred reference to a generated class.
///
/// Stores the target identity and cardinality; the reference is only turned
/// into a resolver expression when the annotation is rendered, so entities may
/// refer to themselves or to classes declared later.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LazyTypeRef {
    pub target: String,
    pub is_list: bool,
}

impl LazyTypeRef {
    pub fn new(target: impl Into<String>, is_list: bool) -> Self {
        Self {
            target: target.into(),
            is_list,
        }
    }

    /// Resolver expression, e.g. `() => PostDTO`.
    pub fn resolver(&self) -> String {
        format!("() => {}", self.target)
    }
}

/// One argument of an annotation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnnotationArg {
    /// Expression emitted verbatim.
    Expr(String),
    Bool(bool),
    Lazy(LazyTypeRef),
}

impl fmt::Display for AnnotationArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnnotationArg::Expr(expr) => f.write_str(expr),
            AnnotationArg::Bool(value) => write!(f, "{value}"),
            AnnotationArg::Lazy(reference) => f.write_str(&reference.resolver()),
        }
    }
}

/// Named, parameterized metadata entry attached to a generated property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    pub name: String,
    pub arguments: Vec<AnnotationArg>,
}

impl Annotation {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            arguments: Vec::new(),
        }
    }

    pub fn with_arg(mut self, arg: AnnotationArg) -> Self {
        self.arguments.push(arg);
        self
    }

    pub fn with_expr(self, expr: impl Into<String>) -> Self {
        self.with_arg(AnnotationArg::Expr(expr.into()))
    }

    /// Deferred nested-entity reference, if this annotation carries one.
    pub fn lazy_ref(&self) -> Option<&LazyTypeRef> {
        self.arguments.iter().find_map(|arg| match arg {
            AnnotationArg::Lazy(reference) => Some(reference),
            _ => None,
        })
    }
}

impl fmt::Display for Annotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{}(", self.name)?;
        for (idx, arg) in self.arguments.iter().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{arg}")?;
        }
        f.write_str(")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_decorator_syntax() {
        let plain = Annotation::new("Expose");
        assert_eq!(plain.to_string(), "@Expose()");

        let nested = Annotation::new("Entity")
            .with_arg(AnnotationArg::Lazy(LazyTypeRef::new("PostDTO", true)))
            .with_arg(AnnotationArg::Bool(true));
        assert_eq!(nested.to_string(), "@Entity(() => PostDTO, true)");
        assert_eq!(nested.lazy_ref().map(|r| r.target.as_str()), Some("PostDTO"));
    }
}
