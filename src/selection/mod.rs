//! 펌프 선정(필터링·점수·순위) 모듈.

pub mod ranking;

pub use ranking::{rank, score, RankingFilters, RankingOutcome, ScoreWeights, ScoredCandidate};
