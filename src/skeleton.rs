//! Skeletal tracking data model.
//!
//! Frames arrive from the sensor collaborator once per capture cycle and are
//! consumed immediately; nothing in this module is retained between frames.
//! Only the head joint feeds the mapping pipeline, but the model carries the
//! full seated-mode upper body set the sensor reports.

/// A 3D position in the sensor's physical coordinate space (meters)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position3 {
    /// Horizontal offset from the sensor axis, positive to the sensor's left
    pub x: f32,
    /// Vertical offset from the sensor axis
    pub y: f32,
    /// Distance from the sensor plane
    pub z: f32,
}

impl Position3 {
    /// Create a new position
    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

/// Tracking confidence reported per joint and per skeleton
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackingState {
    /// The subject or joint was not found
    NotTracked,
    /// Position was inferred from neighboring joints
    Inferred,
    /// Position was directly observed
    Tracked,
}

impl TrackingState {
    /// Whether the position was directly observed
    #[must_use]
    pub const fn is_tracked(self) -> bool {
        matches!(self, Self::Tracked)
    }
}

/// Named anatomical landmarks reported in seated tracking mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JointKind {
    Head,
    ShoulderCenter,
    ShoulderLeft,
    ShoulderRight,
    ElbowLeft,
    ElbowRight,
    WristLeft,
    WristRight,
    HandLeft,
    HandRight,
}

/// A single joint observation within a skeleton
#[derive(Debug, Clone, Copy)]
pub struct Joint {
    /// Which landmark this observation is for
    pub kind: JointKind,
    /// Position in sensor space
    pub position: Position3,
    /// Tracking confidence for this joint
    pub tracking: TrackingState,
}

/// Head joint observation consumed by the mapping pipeline
#[derive(Debug, Clone, Copy)]
pub struct HeadSample {
    /// Head position in sensor space
    pub position: Position3,
    /// Tracking confidence for the head joint
    pub tracking: TrackingState,
}

impl HeadSample {
    /// Whether the head was directly observed this frame
    #[must_use]
    pub const fn is_tracked(&self) -> bool {
        self.tracking.is_tracked()
    }

    /// Horizontal head position in meters
    #[must_use]
    pub const fn x(&self) -> f32 {
        self.position.x
    }
}

/// All joint observations for one detected subject
#[derive(Debug, Clone)]
pub struct Skeleton {
    /// Overall tracking state for the subject
    pub tracking: TrackingState,
    joints: Vec<Joint>,
}

impl Skeleton {
    /// Create a skeleton from its joint observations
    #[must_use]
    pub fn new(tracking: TrackingState, joints: Vec<Joint>) -> Self {
        Self { tracking, joints }
    }

    /// Look up a joint by kind
    #[must_use]
    pub fn joint(&self, kind: JointKind) -> Option<&Joint> {
        self.joints.iter().find(|j| j.kind == kind)
    }

    /// The head joint observation, if the sensor reported one
    #[must_use]
    pub fn head(&self) -> Option<HeadSample> {
        self.joint(JointKind::Head).map(|j| HeadSample {
            position: j.position,
            tracking: j.tracking,
        })
    }
}

/// One sensor frame: zero or more detected subjects
#[derive(Debug, Clone, Default)]
pub struct SkeletonFrame {
    /// Detected subjects, in sensor order
    pub skeletons: Vec<Skeleton>,
}

impl SkeletonFrame {
    /// Create a frame holding a single tracked subject with a tracked head
    /// at the given position
    #[must_use]
    pub fn with_tracked_head(position: Position3) -> Self {
        let head = Joint {
            kind: JointKind::Head,
            position,
            tracking: TrackingState::Tracked,
        };
        Self {
            skeletons: vec![Skeleton::new(TrackingState::Tracked, vec![head])],
        }
    }

    /// The first tracked skeleton's tracked head sample, if any.
    ///
    /// Untracked skeletons and untracked head joints are skipped; this is the
    /// only accessor the mapping pipeline uses.
    #[must_use]
    pub fn tracked_head(&self) -> Option<HeadSample> {
        self.skeletons
            .iter()
            .filter(|s| s.tracking.is_tracked())
            .find_map(Skeleton::head)
            .filter(HeadSample::is_tracked)
    }

    /// Whether the frame contains no subjects at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.skeletons.is_empty()
    }
}
