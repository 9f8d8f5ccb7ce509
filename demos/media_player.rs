//! Media-player simulation driving a hierarchical chart.
//!
//! Builds a four-level chart (power, playback, play modes, menus, battery),
//! then walks a whole listening session through it, printing every entry
//! action and checking the state the engine lands on after each cycle.
//!
//! Run with: `cargo run --example media_player`

use nestate::{transition_table, ChartBuilder, Machine, StateChart, StateId, TransitionTable};

#[derive(Clone, Copy, PartialEq, Debug)]
enum Ev {
    Power,
    Play,
    ModeChange,
    Menu,
    VolumeUp,
    Select,
    Back,
    LowBattery,
    Charge,
}

fn check(label: &str, ok: bool) {
    println!("{label}... {}", if ok { "OK" } else { "ERROR" });
}

struct Player {
    chart: StateChart<Ev, ()>,
    table: TransitionTable<Ev>,
    root: StateId,
    off: StateId,
    paused: StateId,
    normal: StateId,
    shuffle: StateId,
    menu: StateId,
    volume_adjust: StateId,
    playlist_select: StateId,
    low_battery: StateId,
}

fn build_player() -> Player {
    let mut builder = ChartBuilder::new();
    let root = builder.state("ROOT");
    let off = builder.child("OFF", root);
    let on = builder.child("ON", root);
    let playing = builder.child("PLAYING", on);
    let normal = builder.child("NORMAL", playing);
    let shuffle = builder.child("SHUFFLE", playing);
    let repeat = builder.child("REPEAT", playing);
    let paused = builder.child("PAUSED", on);
    let menu = builder.child("MENU", on);
    let volume_adjust = builder.child("VOLUME_ADJUST", menu);
    let playlist_select = builder.child("PLAYLIST_SELECT", menu);
    let low_battery = builder.child("LOW_BATTERY", root);

    builder.default_substate(root, off);
    builder.default_substate(on, paused);
    builder.default_substate(playing, normal);

    for (id, name) in [
        (root, "ROOT"),
        (off, "OFF"),
        (on, "ON"),
        (playing, "PLAYING"),
        (normal, "NORMAL"),
        (shuffle, "SHUFFLE"),
        (repeat, "REPEAT"),
        (paused, "PAUSED"),
        (menu, "MENU"),
        (volume_adjust, "VOLUME ADJUST"),
        (playlist_select, "PLAYLIST SELECT"),
        (low_battery, "LOW BATTERY"),
    ] {
        builder.on_entry(id, move |_, _| println!("Entering {name} state"));
    }
    builder.on_run(off, |_, _| println!("Music player is OFF"));
    builder.on_run(paused, |_, _| println!("Music is PAUSED"));
    builder.on_run(normal, |_, _| println!("Playing in NORMAL mode"));
    builder.on_run(shuffle, |_, _| println!("Playing in SHUFFLE mode"));
    builder.on_run(menu, |_, _| println!("In MENU"));
    builder.on_run(volume_adjust, |_, _| println!("Adjusting VOLUME"));
    builder.on_run(playlist_select, |_, _| println!("Selecting PLAYLIST"));
    builder.on_run(low_battery, |_, _| println!("LOW BATTERY warning"));

    let table = transition_table! {
        off => Ev::Power => on,
        on => Ev::Power => off,
        paused => Ev::Play => playing,
        normal => Ev::ModeChange => shuffle,
        shuffle => Ev::ModeChange => repeat,
        repeat => Ev::ModeChange => normal,
        on => Ev::Menu => menu,
        menu => Ev::Back => on,
        menu => Ev::VolumeUp => volume_adjust,
        volume_adjust => Ev::Back => menu,
        menu => Ev::Select => playlist_select,
        playlist_select => Ev::Back => menu,
        root => Ev::LowBattery => low_battery,
        low_battery => Ev::Charge => on,
    };

    let chart = builder.build().expect("player chart is well-formed");
    Player {
        chart,
        table,
        root,
        off,
        paused,
        normal,
        shuffle,
        menu,
        volume_adjust,
        playlist_select,
        low_battery,
    }
}

fn main() {
    let player = build_player();

    println!("--- Starting Music Player Simulation ---");
    let mut machine = Machine::new(&player.chart, &player.table, player.root, ());
    machine.run();

    let send = |machine: &mut Machine<'_, Ev, ()>, event: Ev| {
        machine.dispatch(event, ());
        machine.run();
    };

    send(&mut machine, Ev::Power);
    check("Turning on the player", machine.state() == player.paused);

    send(&mut machine, Ev::Play);
    check("Starting playback", machine.state() == player.normal);

    send(&mut machine, Ev::ModeChange);
    check("Changing play mode", machine.state() == player.shuffle);

    send(&mut machine, Ev::Menu);
    check("Opening menu", machine.state() == player.menu);

    send(&mut machine, Ev::VolumeUp);
    check("Adjusting volume", machine.state() == player.volume_adjust);

    send(&mut machine, Ev::Back);
    check("Going back to menu", machine.state() == player.menu);

    send(&mut machine, Ev::Select);
    check("Selecting playlist", machine.state() == player.playlist_select);

    send(&mut machine, Ev::LowBattery);
    check("Low battery event", machine.state() == player.low_battery);

    send(&mut machine, Ev::Charge);
    check("Charging the player", machine.state() == player.paused);

    send(&mut machine, Ev::Power);
    check("Turning off the player", machine.state() == player.off);

    println!("--- End of Music Player Simulation ---");
}
