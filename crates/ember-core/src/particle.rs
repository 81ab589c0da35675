//! Particle species and the update/render contract they share.
//!
//! Every species owns a [`Body`] (point-mass kinematics) and decides for
//! itself when it is eligible for flow coupling, how it decays, and how it
//! handles the canvas edge. [`Particle`] is the tagged union stored by the
//! particle system; it forwards each call to the active variant.

use crate::color::{map_range, Hsba};
use crate::constants::*;
use crate::flow_field::FlowField;
use crate::mood::MoodState;
use crate::painter::{Painter, Stroke};
use glam::Vec2;
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ParticleKind {
    Ambient,
    User,
    Text,
}

/// Point-mass state shared by every species.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Body {
    pub position: Vec2,
    pub velocity: Vec2,
    pub acceleration: Vec2,
    pub previous: Vec2,
}

impl Body {
    pub fn at(position: Vec2) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            acceleration: Vec2::ZERO,
            previous: position,
        }
    }

    #[inline]
    pub fn apply(&mut self, force: Vec2) {
        self.acceleration += force;
    }

    /// Couple to the flow cell under the particle; out-of-grid positions feel nothing.
    #[inline]
    pub fn follow(&mut self, field: &FlowField) {
        if let Some(force) = field.lookup(self.position) {
            self.apply(force);
        }
    }

    pub fn integrate(&mut self, max_speed: f32) {
        self.velocity = (self.velocity + self.acceleration).clamp_length_max(max_speed);
        self.previous = self.position;
        self.position += self.velocity;
        self.acceleration = Vec2::ZERO;
    }

    /// Toroidal wrap. Returns true when the particle crossed an edge.
    pub fn wrap(&mut self, bounds: Vec2) -> bool {
        let mut wrapped = false;
        if self.position.x > bounds.x {
            self.position.x = 0.0;
            wrapped = true;
        }
        if self.position.x < 0.0 {
            self.position.x = bounds.x;
            wrapped = true;
        }
        if self.position.y > bounds.y {
            self.position.y = 0.0;
            wrapped = true;
        }
        if self.position.y < 0.0 {
            self.position.y = bounds.y;
            wrapped = true;
        }
        if wrapped {
            // otherwise the stroke would span the whole canvas
            self.previous = self.position;
        }
        wrapped
    }
}

/// Per-frame inputs every particle may read.
pub struct StepContext<'a> {
    pub field: &'a FlowField,
    pub bounds: Vec2,
}

pub trait Behavior {
    fn kind(&self) -> ParticleKind;
    fn body(&self) -> &Body;
    fn life(&self) -> f32;
    fn update<R: Rng + ?Sized>(&mut self, ctx: &StepContext<'_>, rng: &mut R);
    fn stroke(&self, mood: MoodState) -> Stroke;

    fn is_expired(&self) -> bool {
        self.life() <= 0.0
    }

    fn render<P: Painter + ?Sized>(&self, mood: MoodState, painter: &mut P) {
        let body = self.body();
        painter.line(body.previous, body.position, self.stroke(mood));
    }
}

/// Background texture of the field. Never decays, never removed.
#[derive(Clone, Debug, PartialEq)]
pub struct AmbientParticle {
    pub body: Body,
}

impl AmbientParticle {
    pub fn new(position: Vec2) -> Self {
        Self {
            body: Body::at(position),
        }
    }
}

impl Behavior for AmbientParticle {
    fn kind(&self) -> ParticleKind {
        ParticleKind::Ambient
    }

    fn body(&self) -> &Body {
        &self.body
    }

    fn life(&self) -> f32 {
        FULL_LIFE
    }

    fn is_expired(&self) -> bool {
        false
    }

    fn update<R: Rng + ?Sized>(&mut self, ctx: &StepContext<'_>, _rng: &mut R) {
        self.body.follow(ctx.field);
        self.body.integrate(AMBIENT_MAX_SPEED);
        self.body.wrap(ctx.bounds);
    }

    fn stroke(&self, mood: MoodState) -> Stroke {
        let hue = map_range(mood.valence, 0.0, 1.0, AMBIENT_HUE_COLD, AMBIENT_HUE_WARM);
        let sat_bri = 60.0 + mood.energy * 20.0;
        Stroke {
            color: Hsba::new(hue, sat_bri, sat_bri, AMBIENT_ALPHA),
            weight: 2.0 + mood.energy * 4.0,
        }
    }
}

/// Trail left by a pointer gesture.
#[derive(Clone, Debug, PartialEq)]
pub struct UserParticle {
    pub body: Body,
    pub hue: f32,
    pub life: f32,
}

impl UserParticle {
    pub fn new(position: Vec2, hue: f32) -> Self {
        Self {
            body: Body::at(position),
            hue,
            life: FULL_LIFE,
        }
    }
}

impl Behavior for UserParticle {
    fn kind(&self) -> ParticleKind {
        ParticleKind::User
    }

    fn body(&self) -> &Body {
        &self.body
    }

    fn life(&self) -> f32 {
        self.life
    }

    fn update<R: Rng + ?Sized>(&mut self, ctx: &StepContext<'_>, _rng: &mut R) {
        self.body.follow(ctx.field);
        self.body.integrate(USER_MAX_SPEED);
        self.life -= USER_DECAY_PER_FRAME;
        self.body.wrap(ctx.bounds);
    }

    fn stroke(&self, _mood: MoodState) -> Stroke {
        let alpha = map_range(self.life, 0.0, FULL_LIFE, 0.0, USER_MAX_ALPHA);
        Stroke {
            color: Hsba::new(self.hue, 70.0, 100.0, alpha),
            weight: USER_STROKE_WEIGHT,
        }
    }
}

/// One sampled glyph point: smolders at its anchor, then ignites and drifts up.
#[derive(Clone, Debug, PartialEq)]
pub struct TextParticle {
    pub body: Body,
    pub anchor: Vec2,
    pub burn_delay: u32,
    pub burning: bool,
    pub life: f32,
}

impl TextParticle {
    pub fn new(anchor: Vec2, burn_delay: u32) -> Self {
        Self {
            body: Body::at(anchor),
            anchor,
            burn_delay,
            burning: false,
            life: FULL_LIFE,
        }
    }

    /// Draw an ignition delay uniformly from the configured frame window.
    pub fn ignition_delay<R: Rng + ?Sized>(rng: &mut R) -> u32 {
        rng.gen_range(IGNITION_DELAY_MIN..=IGNITION_DELAY_MAX)
    }

    pub fn is_smoldering(&self) -> bool {
        !self.burning
    }
}

impl Behavior for TextParticle {
    fn kind(&self) -> ParticleKind {
        ParticleKind::Text
    }

    fn body(&self) -> &Body {
        &self.body
    }

    fn life(&self) -> f32 {
        self.life
    }

    fn update<R: Rng + ?Sized>(&mut self, ctx: &StepContext<'_>, rng: &mut R) {
        if self.burn_delay > 0 {
            self.burn_delay -= 1;
            let jitter = Vec2::new(
                rng.gen_range(-SMOLDER_JITTER..=SMOLDER_JITTER),
                rng.gen_range(-SMOLDER_JITTER..=SMOLDER_JITTER),
            );
            self.body.position = self.anchor + jitter;
            self.body.previous = self.body.position;
            return;
        }
        self.burning = true;
        self.body.follow(ctx.field);
        self.body.apply(Vec2::new(
            rng.gen_range(-BURN_LATERAL_IMPULSE..=BURN_LATERAL_IMPULSE),
            rng.gen_range(BURN_LIFT_MIN..=BURN_LIFT_MAX),
        ));
        self.life -= TEXT_DECAY_PER_FRAME;
        self.body.integrate(TEXT_MAX_SPEED * BURNING_SPEED_FACTOR);
        // no wrap: burning text disperses past the edges
    }

    fn stroke(&self, _mood: MoodState) -> Stroke {
        let color = if self.life > ASH_LIFE_THRESHOLD {
            Hsba::new(
                map_range(self.life, FULL_LIFE, ASH_LIFE_THRESHOLD, 50.0, 0.0),
                100.0,
                100.0,
                map_range(self.life, FULL_LIFE, 0.0, 1.0, 0.0),
            )
        } else {
            Hsba::new(
                0.0,
                0.0,
                50.0,
                map_range(self.life, ASH_LIFE_THRESHOLD, 0.0, 0.5, 0.0),
            )
        };
        let weight = if self.burning {
            BURNING_STROKE_WEIGHT
        } else {
            TEXT_STROKE_WEIGHT
        };
        Stroke { color, weight }
    }

    fn render<P: Painter + ?Sized>(&self, mood: MoodState, painter: &mut P) {
        let stroke = self.stroke(mood);
        if self.burning {
            painter.line(self.body.previous, self.body.position, stroke);
        } else {
            painter.point(self.body.position, stroke);
        }
    }
}

/// Tagged union stored by the particle system.
#[derive(Clone, Debug, PartialEq)]
pub enum Particle {
    Ambient(AmbientParticle),
    User(UserParticle),
    Text(TextParticle),
}

impl Behavior for Particle {
    fn kind(&self) -> ParticleKind {
        match self {
            Particle::Ambient(p) => p.kind(),
            Particle::User(p) => p.kind(),
            Particle::Text(p) => p.kind(),
        }
    }

    fn body(&self) -> &Body {
        match self {
            Particle::Ambient(p) => p.body(),
            Particle::User(p) => p.body(),
            Particle::Text(p) => p.body(),
        }
    }

    fn life(&self) -> f32 {
        match self {
            Particle::Ambient(p) => p.life(),
            Particle::User(p) => p.life(),
            Particle::Text(p) => p.life(),
        }
    }

    fn is_expired(&self) -> bool {
        match self {
            Particle::Ambient(p) => p.is_expired(),
            Particle::User(p) => p.is_expired(),
            Particle::Text(p) => p.is_expired(),
        }
    }

    fn update<R: Rng + ?Sized>(&mut self, ctx: &StepContext<'_>, rng: &mut R) {
        match self {
            Particle::Ambient(p) => p.update(ctx, rng),
            Particle::User(p) => p.update(ctx, rng),
            Particle::Text(p) => p.update(ctx, rng),
        }
    }

    fn stroke(&self, mood: MoodState) -> Stroke {
        match self {
            Particle::Ambient(p) => p.stroke(mood),
            Particle::User(p) => p.stroke(mood),
            Particle::Text(p) => p.stroke(mood),
        }
    }

    fn render<P: Painter + ?Sized>(&self, mood: MoodState, painter: &mut P) {
        match self {
            Particle::Ambient(p) => p.render(mood, painter),
            Particle::User(p) => p.render(mood, painter),
            Particle::Text(p) => p.render(mood, painter),
        }
    }
}

impl From<AmbientParticle> for Particle {
    fn from(p: AmbientParticle) -> Self {
        Particle::Ambient(p)
    }
}

impl From<UserParticle> for Particle {
    fn from(p: UserParticle) -> Self {
        Particle::User(p)
    }
}

impl From<TextParticle> for Particle {
    fn from(p: TextParticle) -> Self {
        Particle::Text(p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn empty_field() -> FlowField {
        // zero cells: every lookup misses, so motion is purely inertial
        FlowField::new(0.0, 0.0, 50.0, 0.1, 1)
    }

    fn ctx(field: &FlowField) -> StepContext<'_> {
        StepContext {
            field,
            bounds: Vec2::new(400.0, 300.0),
        }
    }

    #[test]
    fn wraps_each_edge_and_resets_previous() {
        let field = empty_field();
        let mut rng = StdRng::seed_from_u64(1);
        let cases = [
            (Vec2::new(401.0, 100.0), Vec2::new(0.0, 100.0)),
            (Vec2::new(-1.0, 100.0), Vec2::new(400.0, 100.0)),
            (Vec2::new(100.0, 301.0), Vec2::new(100.0, 0.0)),
            (Vec2::new(100.0, -1.0), Vec2::new(100.0, 300.0)),
        ];
        for (start, expected) in cases {
            let mut p = AmbientParticle::new(start);
            p.update(&ctx(&field), &mut rng);
            assert_eq!(p.body.position, expected, "start {start:?}");
            assert_eq!(p.body.previous, p.body.position);
        }
    }

    #[test]
    fn velocity_is_clamped_to_species_speed() {
        let field = empty_field();
        let mut rng = StdRng::seed_from_u64(1);
        let mut p = UserParticle::new(Vec2::new(100.0, 100.0), 10.0);
        p.body.apply(Vec2::new(50.0, 0.0));
        p.update(&ctx(&field), &mut rng);
        assert!((p.body.velocity.length() - USER_MAX_SPEED).abs() < 1e-5);
        assert_eq!(p.body.acceleration, Vec2::ZERO);
        assert_eq!(p.body.previous, Vec2::new(100.0, 100.0));
    }

    #[test]
    fn smoldering_text_stays_near_anchor_without_decay() {
        let field = empty_field();
        let mut rng = StdRng::seed_from_u64(9);
        let anchor = Vec2::new(200.0, 150.0);
        let mut p = TextParticle::new(anchor, 5);
        for _ in 0..5 {
            p.update(&ctx(&field), &mut rng);
            assert!(p.is_smoldering());
            assert_eq!(p.life, FULL_LIFE);
            assert_eq!(p.body.velocity, Vec2::ZERO);
            assert!((p.body.position - anchor).abs().max_element() <= SMOLDER_JITTER);
        }
        p.update(&ctx(&field), &mut rng);
        assert!(p.burning);
        assert_eq!(p.life, FULL_LIFE - TEXT_DECAY_PER_FRAME);
        assert!(p.body.velocity.y < 0.0, "burning text drifts upward");
    }

    #[test]
    fn burning_text_can_leave_the_canvas() {
        let field = empty_field();
        let mut rng = StdRng::seed_from_u64(2);
        let mut p = TextParticle::new(Vec2::new(200.0, 2.0), 0);
        for _ in 0..10 {
            p.update(&ctx(&field), &mut rng);
        }
        assert!(p.body.position.y < 0.0);
        assert!(p.body.velocity.length() <= TEXT_MAX_SPEED * BURNING_SPEED_FACTOR + 1e-5);
    }

    #[test]
    fn user_alpha_fades_with_life() {
        let mood = MoodState::default();
        let mut p = UserParticle::new(Vec2::ZERO, 120.0);
        assert!((p.stroke(mood).color.alpha - USER_MAX_ALPHA).abs() < 1e-6);
        p.life = 0.0;
        assert!(p.stroke(mood).color.alpha.abs() < 1e-6);
        assert_eq!(p.stroke(mood).weight, USER_STROKE_WEIGHT);
        assert_eq!(p.stroke(mood).color.hue, 120.0);
    }

    #[test]
    fn text_turns_from_ember_to_ash() {
        let mood = MoodState::default();
        let mut p = TextParticle::new(Vec2::ZERO, 0);
        let fresh = p.stroke(mood);
        assert!((fresh.color.hue - 50.0).abs() < 1e-4);
        assert!((fresh.color.alpha - 1.0).abs() < 1e-4);
        assert_eq!(fresh.weight, TEXT_STROKE_WEIGHT);

        p.burning = true;
        p.life = 101.0;
        let late = p.stroke(mood);
        assert!(late.color.hue < 1.0);
        assert_eq!(late.color.saturation, 100.0);
        assert_eq!(late.weight, BURNING_STROKE_WEIGHT);

        p.life = 100.0;
        let ash = p.stroke(mood);
        assert_eq!((ash.color.hue, ash.color.saturation, ash.color.brightness), (0.0, 0.0, 50.0));
        assert!((ash.color.alpha - 0.5).abs() < 1e-6);
        p.life = 50.0;
        assert!((p.stroke(mood).color.alpha - 0.25).abs() < 1e-6);
    }

    #[test]
    fn ignition_delay_is_within_window() {
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..500 {
            let d = TextParticle::ignition_delay(&mut rng);
            assert!((IGNITION_DELAY_MIN..=IGNITION_DELAY_MAX).contains(&d));
        }
    }
}
