pub mod episode_length;
