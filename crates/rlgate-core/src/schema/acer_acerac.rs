//! Parameter schema for the acer/acerac family
//!
//! Matches the command-line interface of the acerac training runner. Every
//! parameter declares its own default, so a missing optional key is never
//! an error; only unknown keys, wrong types, and out-of-choice values are.

use super::{ParameterSchema, ParameterSpec};
use serde_json::json;
use std::sync::OnceLock;

const ALGO_CHOICES: &[&str] = &["acer", "acerac"];
const NOISE_TYPE_CHOICES: &[&str] = &["autocor+u"];

/// Schema shared by `acer` and `acerac`.
pub(super) fn schema() -> &'static ParameterSchema {
    static SCHEMA: OnceLock<ParameterSchema> = OnceLock::new();
    SCHEMA.get_or_init(|| {
        ParameterSchema::new(vec![
            ParameterSpec::string("algo").default("acer").choices(ALGO_CHOICES),
            ParameterSpec::string("env_name").default("CartPole-v0"),
            ParameterSpec::float("gamma").default(0.99),
            ParameterSpec::float("lam").default(0.9),
            ParameterSpec::float("b").default(3.0),
            ParameterSpec::float("actor_adam_epsilon"),
            ParameterSpec::float("actor_adam_beta1").default(0.9),
            ParameterSpec::float("actor_adam_beta2").default(0.999),
            ParameterSpec::float("critic_adam_epsilon"),
            ParameterSpec::float("critic_adam_beta1").default(0.9),
            ParameterSpec::float("critic_adam_beta2").default(0.999),
            ParameterSpec::float("actor_lr").default(0.001),
            ParameterSpec::float("critic_lr").default(0.001),
            ParameterSpec::float("explorer_lr").default(0.001),
            ParameterSpec::float("actor_beta_penalty").default(0.001),
            ParameterSpec::int("n_step").default(1),
            ParameterSpec::int("c").default(1),
            ParameterSpec::float("c0").default(1.0),
            ParameterSpec::float("alpha").default(0.5),
            ParameterSpec::int("tau").default(2),
            ParameterSpec::int("n").default(2),
            ParameterSpec::string("noise_type")
                .default("autocor+u")
                .choices(NOISE_TYPE_CHOICES),
            ParameterSpec::float("std"),
            ParameterSpec::int("learning_starts").default(10_000),
            ParameterSpec::int("memory_size").default(1_000_000),
            ParameterSpec::int_list("actor_layers").default(json!([100, 100])),
            ParameterSpec::int_list("critic_layers").default(json!([100, 100])),
            ParameterSpec::int("num_parallel_envs").default(1),
            ParameterSpec::int("batches_per_env").default(5),
            ParameterSpec::flag("standardize_obs"),
            ParameterSpec::float("rescale_rewards").default(-1.0),
            ParameterSpec::float("limit_reward_tanh"),
            ParameterSpec::float("td_clip"),
            ParameterSpec::float("gradient_norm"),
            ParameterSpec::float("gradient_norm_median_threshold").default(4.0),
            ParameterSpec::flag("use_v"),
            ParameterSpec::int("evaluate_time_steps_interval").default(10_000),
            ParameterSpec::int("num_evaluation_runs").default(10),
            ParameterSpec::int("max_time_steps").default(-1),
            ParameterSpec::string("log_dir").default("logs/"),
            ParameterSpec::flag("no_checkpoint"),
            ParameterSpec::flag("no_tensorboard"),
            ParameterSpec::string("experiment_name").default(""),
            ParameterSpec::flag("save_video_on_kill"),
            ParameterSpec::int("record_time_steps"),
            ParameterSpec::flag("use_cpu"),
            ParameterSpec::flag("synchronous"),
            ParameterSpec::int("timesteps_increase"),
            ParameterSpec::int_list("dump").allow_empty(),
        ])
    })
}
