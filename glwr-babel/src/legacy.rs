//! Functions that only get a declaration
//!
//! Entry points exported directly by every platform's GL library are declared as-is. Everything
//! else is reached through the loader's function pointer table and gets an inline wrapper.

use std::collections::{BTreeSet, HashSet};

/// Decides which functions are declared without a wrapper.
pub trait LegacyFunctions {
    fn is_legacy(&self, function: &str) -> bool;
}

impl LegacyFunctions for HashSet<String> {
    fn is_legacy(&self, function: &str) -> bool {
        self.contains(function)
    }
}

impl LegacyFunctions for BTreeSet<String> {
    fn is_legacy(&self, function: &str) -> bool {
        self.contains(function)
    }
}

impl LegacyFunctions for [&str] {
    fn is_legacy(&self, function: &str) -> bool {
        self.iter().any(|name| *name == function)
    }
}

/// The OpenGL 1.0 and 1.1 entry points that survive in the core profile.
#[derive(Debug, Default, Clone, Copy)]
pub struct Gl1;

/// Sorted.
const GL1_FUNCTIONS: &[&str] = &[
    "glBindTexture",
    "glBlendFunc",
    "glClear",
    "glClearColor",
    "glClearDepth",
    "glClearStencil",
    "glColorMask",
    "glCopyTexImage1D",
    "glCopyTexImage2D",
    "glCopyTexSubImage1D",
    "glCopyTexSubImage2D",
    "glCullFace",
    "glDeleteTextures",
    "glDepthFunc",
    "glDepthMask",
    "glDepthRange",
    "glDisable",
    "glDrawArrays",
    "glDrawBuffer",
    "glDrawElements",
    "glEnable",
    "glFinish",
    "glFlush",
    "glFrontFace",
    "glGenTextures",
    "glGetBooleanv",
    "glGetDoublev",
    "glGetError",
    "glGetFloatv",
    "glGetIntegerv",
    "glGetPointerv",
    "glGetString",
    "glGetTexImage",
    "glGetTexLevelParameterfv",
    "glGetTexLevelParameteriv",
    "glGetTexParameterfv",
    "glGetTexParameteriv",
    "glHint",
    "glIsEnabled",
    "glIsTexture",
    "glLineWidth",
    "glLogicOp",
    "glPixelStoref",
    "glPixelStorei",
    "glPointSize",
    "glPolygonMode",
    "glPolygonOffset",
    "glReadBuffer",
    "glReadPixels",
    "glScissor",
    "glStencilFunc",
    "glStencilMask",
    "glStencilOp",
    "glTexImage1D",
    "glTexImage2D",
    "glTexParameterf",
    "glTexParameterfv",
    "glTexParameteri",
    "glTexParameteriv",
    "glTexSubImage1D",
    "glTexSubImage2D",
    "glViewport",
];

impl Gl1 {
    pub fn functions() -> &'static [&'static str] {
        GL1_FUNCTIONS
    }
}

impl LegacyFunctions for Gl1 {
    fn is_legacy(&self, function: &str) -> bool {
        GL1_FUNCTIONS.binary_search(&function).is_ok()
    }
}
