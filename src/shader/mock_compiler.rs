/// Mock shader compiler for unit tests (no GPU required)
///
/// Records every submission so tests can assert on the exact stage source
/// strings handed to the backend, and can be armed to fail the next compile
/// to exercise error propagation.

use std::sync::{Arc, Mutex};

use crate::engine_bail;
use crate::error::Result;
use crate::scene::ShaderTarget;
use crate::shader::compiler::{ShaderCompiler, ShaderProgram};
use crate::shader::stage::{ShaderLanguage, StageSources};

// ============================================================================
// Mock Program
// ============================================================================

#[derive(Debug)]
pub struct MockProgram {
    pub id: u64,
}

impl ShaderProgram for MockProgram {}

// ============================================================================
// Mock Compiler
// ============================================================================

pub struct MockCompiler {
    /// Every successful submission, in order
    pub submissions: Vec<(ShaderLanguage, StageSources)>,
    /// When true, the next compile call fails with a BackendError
    pub fail_next: bool,
    next_id: u64,
}

impl MockCompiler {
    pub fn new() -> Self {
        Self {
            submissions: Vec::new(),
            fail_next: false,
            next_id: 0,
        }
    }

    /// Create a MockCompiler wrapped for handing to an Effect, keeping a
    /// concrete handle for inspection
    pub fn new_shared() -> Arc<Mutex<MockCompiler>> {
        Arc::new(Mutex::new(MockCompiler::new()))
    }

    pub fn last_submission(&self) -> Option<&StageSources> {
        self.submissions.last().map(|(_, sources)| sources)
    }
}

impl ShaderCompiler for MockCompiler {
    fn compile(
        &mut self,
        language: ShaderLanguage,
        sources: &StageSources,
    ) -> Result<Arc<dyn ShaderProgram>> {
        if self.fail_next {
            self.fail_next = false;
            engine_bail!(
                BackendError,
                "nebula3d::MockCompiler",
                "forced compilation failure"
            );
        }
        self.submissions.push((language, sources.clone()));
        self.next_id += 1;
        Ok(Arc::new(MockProgram { id: self.next_id }))
    }
}

// ============================================================================
// Mock Scene Target
// ============================================================================

#[derive(Default)]
pub struct MockNode {
    /// Every program attached to this node, in order
    pub attached: Vec<Arc<dyn ShaderProgram>>,
}

impl MockNode {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ShaderTarget for MockNode {
    fn set_shader(&mut self, program: Arc<dyn ShaderProgram>) {
        self.attached.push(program);
    }
}
