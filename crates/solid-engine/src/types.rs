use geom_kernel::KernelError;
use uuid::Uuid;

/// Errors from interpreting an IGS document into a solid. Each variant
/// pins the failure to the geometry element being built so a bad input
/// is reported as "component X failed", not as a bare kernel error.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("board solid construction failed")]
    Board {
        #[source]
        source: KernelError,
    },

    #[error("component {id} geometry failed")]
    Component {
        id: Uuid,
        #[source]
        source: KernelError,
    },

    #[error("mounting hole {index} geometry failed")]
    MountingHole {
        index: usize,
        #[source]
        source: KernelError,
    },

    #[error("label {text:?} geometry failed")]
    Label {
        text: String,
        #[source]
        source: KernelError,
    },

    #[error("board feature {index} geometry failed")]
    Feature {
        index: usize,
        #[source]
        source: KernelError,
    },
}
