use glam::Vec3;

/// Easing curves used by the scene animations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Easing {
    Linear,
    /// Idle pulse breathing.
    QuadInOut,
    /// Hover grow/settle.
    QuadOut,
    /// Camera fly-to.
    CubicInOut,
    /// Click feedback; overshoots past the end value before settling.
    BackOut,
}

impl Easing {
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::QuadInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Easing::QuadOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::CubicInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            Easing::BackOut => {
                const C1: f32 = 1.70158;
                const C3: f32 = C1 + 1.0;
                let u = t - 1.0;
                1.0 + C3 * u * u * u + C1 * u * u
            }
        }
    }
}

/// Repeat policy. `Yoyo { cycles: None }` runs indefinitely and never
/// retires; `Yoyo { cycles: Some(n) }` plays n forward+back round trips.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Repeat {
    Once,
    Yoyo { cycles: Option<u32> },
}

/// Property channel a tween drives. Starting a new tween on a channel
/// supersedes any in-flight tween on the same channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Channel {
    CameraEye,
    PanelPulse(usize),
    PanelHover(usize),
}

/// A time-bounded interpolation of a `Vec3` property, advanced once per
/// tick by wall-clock delta. Scalar channels use a uniform Vec3.
#[derive(Clone, Debug)]
pub struct Tween {
    pub channel: Channel,
    from: Vec3,
    to: Vec3,
    duration: f32,
    elapsed: f32,
    easing: Easing,
    repeat: Repeat,
}

impl Tween {
    pub fn new(channel: Channel, from: Vec3, to: Vec3, duration: f32, easing: Easing) -> Self {
        Self {
            channel,
            from,
            to,
            duration: duration.max(1e-6),
            elapsed: 0.0,
            easing,
            repeat: Repeat::Once,
        }
    }

    pub fn yoyo(mut self, cycles: Option<u32>) -> Self {
        self.repeat = Repeat::Yoyo { cycles };
        self
    }

    fn finished(&self) -> bool {
        match self.repeat {
            Repeat::Once => self.elapsed >= self.duration,
            Repeat::Yoyo { cycles: None } => false,
            Repeat::Yoyo { cycles: Some(n) } => self.elapsed >= self.duration * 2.0 * n as f32,
        }
    }

    /// Current interpolated value. Yoyo tweens mirror on odd half-cycles.
    pub fn sample(&self) -> Vec3 {
        let t = match self.repeat {
            Repeat::Once => (self.elapsed / self.duration).min(1.0),
            Repeat::Yoyo { .. } => {
                let phase = self.elapsed / self.duration;
                let cycle = phase as u32;
                let frac = phase - cycle as f32;
                if cycle % 2 == 0 {
                    frac
                } else {
                    1.0 - frac
                }
            }
        };
        self.from.lerp(self.to, self.easing.apply(t))
    }

    /// Final value a finished one-shot settles at.
    pub fn end_value(&self) -> Vec3 {
        match self.repeat {
            Repeat::Once => self.to,
            // A retiring yoyo lands back where it started.
            Repeat::Yoyo { .. } => self.from,
        }
    }
}

/// Cooperative scheduler: all active tweens advanced by one delta per tick,
/// finished one-shots self-retire after reporting their end value.
#[derive(Default)]
pub struct Tweens {
    active: Vec<Tween>,
}

impl Tweens {
    /// Start a tween, superseding any in-flight tween on the same channel.
    pub fn start(&mut self, tween: Tween) {
        self.active.retain(|t| t.channel != tween.channel);
        self.active.push(tween);
    }

    pub fn cancel(&mut self, channel: Channel) {
        self.active.retain(|t| t.channel != channel);
    }

    pub fn is_active(&self, channel: Channel) -> bool {
        self.active.iter().any(|t| t.channel == channel)
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Advance every tween by `dt` seconds and report `(channel, value)`
    /// pairs via the callback. Finished tweens report their settled end
    /// value once, then retire.
    pub fn advance(&mut self, dt: f32, mut apply: impl FnMut(Channel, Vec3)) {
        for t in &mut self.active {
            t.elapsed += dt.max(0.0);
            if t.finished() {
                apply(t.channel, t.end_value());
            } else {
                apply(t.channel, t.sample());
            }
        }
        self.active.retain(|t| !t.finished());
    }
}
