//! Parameter schema for the PPO/SAC family
//!
//! Matches the command-line interface of the rllib-based runner. `algo` is
//! the only required parameter; everything else carries a default.

use super::{ParameterSchema, ParameterSpec};
use serde_json::json;
use std::sync::OnceLock;

const ALGO_CHOICES: &[&str] = &["PPO", "SAC"];
const ACTIVATION_CHOICES: &[&str] = &["tanh", "relu"];

/// Schema shared by `PPO` and `SAC`.
pub(super) fn schema() -> &'static ParameterSchema {
    static SCHEMA: OnceLock<ParameterSchema> = OnceLock::new();
    SCHEMA.get_or_init(|| {
        ParameterSchema::new(vec![
            ParameterSpec::string("algo").required().choices(ALGO_CHOICES),
            ParameterSpec::string("env").default("Humanoid-v2"),
            ParameterSpec::int("max_timesteps").default(1_000_000),
            ParameterSpec::float("gamma").default(0.99),
            ParameterSpec::float("initial_alpha").default(1.0),
            ParameterSpec::float("lambda").default(0.95),
            ParameterSpec::float("lr").default(0.001),
            ParameterSpec::float("actor_learning_rate").default(0.0003),
            ParameterSpec::float("critic_learning_rate").default(0.0003),
            ParameterSpec::float("entropy_learning_rate").default(0.0003),
            ParameterSpec::int("learning_starts").default(10_000),
            ParameterSpec::float("tau").default(0.005),
            ParameterSpec::int("buffer_size").default(1_000_000),
            ParameterSpec::int_list("fcnet_hiddens").default(json!([256, 256])),
            ParameterSpec::int_list("policy_layers").default(json!([256, 256])),
            ParameterSpec::int_list("q_value_layers").default(json!([256, 256])),
            ParameterSpec::int("num_sgd_iter").default(10),
            ParameterSpec::int("train_batch_size").default(64),
            ParameterSpec::int("sgd_minibatch_size").default(64),
            ParameterSpec::int("evaluation_interval").default(5),
            ParameterSpec::int("evaluation_num_episodes").default(10),
            ParameterSpec::string("fcnet_activation")
                .default("tanh")
                .choices(ACTIVATION_CHOICES),
            ParameterSpec::float("kl_target").default(0.01),
            ParameterSpec::float("vf_clip_param").default(10.0),
            ParameterSpec::float("clip_param").default(0.2),
        ])
    })
}
