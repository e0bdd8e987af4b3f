mod raid_event;
mod raid_participation;
mod raid_signup;
