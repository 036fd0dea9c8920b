//! Каталог конкретных сообщений-команд.

use super::Message;
use crate::types::{EntityId, Vec2};

/// Нанести урон сущности.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DealDamage {
    pub target: EntityId,
    pub amount: i32,
}

impl Message for DealDamage {}

/// Показать взрыв в точке мира.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnExplosion {
    pub position: Vec2,
    pub scale: f32,
}

impl Message for SpawnExplosion {}

/// Тряхнуть камеру.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShakeCamera {
    pub strength: f32,
}

impl Message for ShakeCamera {}

/// Проиграть именованный звук.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaySound {
    pub name: String,
}

impl Message for PlaySound {}
