//! Каталог конкретных событийных нагрузок.
//!
//! Событие — неизменяемый носитель значения без идентичности сверх своего
//! типа и полей. Набор закрыт внутри модуля, но открыт для расширения:
//! новая форма — это новый тип с `impl Event`.

use super::Event;
use crate::types::{EntityId, Vec2};

// === События игрового цикла ===

/// Игра запущена.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StartGame;

impl Event for StartGame {}

/// Пауза включена или снята.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TogglePause {
    pub paused: bool,
}

impl Event for TogglePause {}

/// Возврат в главное меню.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MainMenu;

impl Event for MainMenu {}

/// Игра остановлена.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StopGame;

impl Event for StopGame {}

/// Игра окончена, с исходом.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOver {
    pub won: bool,
}

impl Event for GameOver {}

// === События чанков мира ===

/// Сгенерирован новый чанк.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewChunk {
    pub position: Vec2,
    pub size: f32,
}

impl Event for NewChunk {}

/// Чанк включён в симуляцию.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnableChunk {
    pub position: Vec2,
}

impl Event for EnableChunk {}

/// Чанк выключен из симуляции.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisableChunk {
    pub position: Vec2,
}

impl Event for DisableChunk {}

/// Запрошена загрузка набора чанков.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadChunks {
    pub positions: Vec<Vec2>,
}

impl Event for LoadChunks {}

// === События игрока ===

/// Игрок появился в мире.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerSpawned {
    pub player: EntityId,
}

impl Event for PlayerSpawned {}

/// Игрок погиб.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerDied;

impl Event for PlayerDied {}

// === События снарядов ===

/// Снаряд попал в цель.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectileHit {
    pub hit: EntityId,
    pub damage: i32,
}

impl Event for ProjectileHit {}

// === События сущностей ===

/// Сущность получила урон.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntityDamaged {
    pub entity: EntityId,
    pub health: i32,
    pub max_health: i32,
}

impl Event for EntityDamaged {}

/// Сущность уничтожена.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntityKilled {
    pub entity: EntityId,
}

impl Event for EntityKilled {}

// === События корабля ===

/// Корабль разбился.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpaceshipCrashed {
    pub entity: EntityId,
    pub hit_force: f32,
}

impl Event for SpaceshipCrashed {}

/// Корабль приземлился.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpaceshipLanded {
    pub entity: EntityId,
}

impl Event for SpaceshipLanded {}

/// Корабль взлетел.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpaceshipTookOff {
    pub entity: EntityId,
}

impl Event for SpaceshipTookOff {}

// === События волн ===

/// Началась новая волна.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewWave;

impl Event for NewWave {}

/// Волна зачищена.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaveCleared;

impl Event for WaveCleared {}
