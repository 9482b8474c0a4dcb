//! Viewport camera projection.
//!
//! Screen coordinates are logical pixels with the origin at the top-left
//! corner and y growing downwards, the same convention window cursors use.
//! Cameras look down their local -Z axis with +Y up.

use glam::{Mat3, Quat, Vec2, Vec3};

/// Epsilon for parallel-ray and behind-camera checks
const EPSILON: f32 = 1e-6;

/// A ray with a normalized direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    pub fn point_at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Intersect with the plane through `plane_origin` with normal `plane_normal`.
    ///
    /// Returns `None` if the ray is parallel to the plane or the plane lies
    /// behind the ray origin.
    pub fn intersect_plane(&self, plane_origin: Vec3, plane_normal: Vec3) -> Option<Vec3> {
        let denom = self.direction.dot(plane_normal);
        if denom.abs() < EPSILON {
            return None;
        }

        let t = (plane_origin - self.origin).dot(plane_normal) / denom;
        if t < 0.0 {
            return None;
        }

        Some(self.point_at(t))
    }
}

/// What the modal tool needs to know about the viewport camera.
pub trait Viewport {
    /// Unit view direction in world space.
    fn forward(&self) -> Vec3;

    /// Ray from the camera through a screen position.
    fn screen_ray(&self, screen: Vec2) -> Option<Ray>;

    /// Screen position of a world point, `None` when it cannot be projected.
    fn world_to_screen(&self, world: Vec3) -> Option<Vec2>;
}

/// Camera projection model
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Projection {
    /// Vertical field of view in radians
    Perspective { fov_y: f32 },
    /// Visible world height
    Orthographic { height: f32 },
}

/// A plain glam camera implementing [`Viewport`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewCamera {
    pub position: Vec3,
    pub rotation: Quat,
    pub projection: Projection,
    /// Viewport size in logical pixels
    pub size: Vec2,
}

impl ViewCamera {
    pub fn new(position: Vec3, rotation: Quat, projection: Projection, size: Vec2) -> Self {
        Self {
            position,
            rotation,
            projection,
            size,
        }
    }

    /// Camera at `position` looking at `target`.
    pub fn looking_at(
        position: Vec3,
        target: Vec3,
        up: Vec3,
        projection: Projection,
        size: Vec2,
    ) -> Self {
        let back = (position - target).normalize();
        let right = up.cross(back).normalize();
        let up = back.cross(right);
        let rotation = Quat::from_mat3(&Mat3::from_cols(right, up, back));
        Self::new(position, rotation, projection, size)
    }

    fn aspect(&self) -> f32 {
        self.size.x / self.size.y
    }

    fn has_area(&self) -> bool {
        self.size.x > 0.0 && self.size.y > 0.0
    }

    fn screen_to_ndc(&self, screen: Vec2) -> Vec2 {
        Vec2::new(
            screen.x / self.size.x * 2.0 - 1.0,
            1.0 - screen.y / self.size.y * 2.0,
        )
    }

    fn ndc_to_screen(&self, ndc: Vec2) -> Vec2 {
        Vec2::new(
            (ndc.x + 1.0) * 0.5 * self.size.x,
            (1.0 - ndc.y) * 0.5 * self.size.y,
        )
    }
}

impl Viewport for ViewCamera {
    fn forward(&self) -> Vec3 {
        self.rotation * Vec3::NEG_Z
    }

    fn screen_ray(&self, screen: Vec2) -> Option<Ray> {
        if !self.has_area() {
            return None;
        }

        let ndc = self.screen_to_ndc(screen);
        match self.projection {
            Projection::Perspective { fov_y } => {
                let tan = (fov_y * 0.5).tan();
                let dir_view = Vec3::new(ndc.x * tan * self.aspect(), ndc.y * tan, -1.0);
                Some(Ray::new(self.position, self.rotation * dir_view))
            }
            Projection::Orthographic { height } => {
                let half_height = height * 0.5;
                let half_width = half_height * self.aspect();
                let offset = Vec3::new(ndc.x * half_width, ndc.y * half_height, 0.0);
                Some(Ray::new(
                    self.position + self.rotation * offset,
                    self.forward(),
                ))
            }
        }
    }

    fn world_to_screen(&self, world: Vec3) -> Option<Vec2> {
        if !self.has_area() {
            return None;
        }

        let view = self.rotation.inverse() * (world - self.position);
        let ndc = match self.projection {
            Projection::Perspective { fov_y } => {
                // Points at or behind the camera plane have no screen position
                if view.z > -EPSILON {
                    return None;
                }
                let tan = (fov_y * 0.5).tan();
                let depth = -view.z;
                Vec2::new(view.x / (depth * tan * self.aspect()), view.y / (depth * tan))
            }
            Projection::Orthographic { height } => {
                let half_height = height * 0.5;
                Vec2::new(view.x / (half_height * self.aspect()), view.y / half_height)
            }
        };

        Some(self.ndc_to_screen(ndc))
    }
}
