use clap::{Arg, ArgAction, Command};

const EXAMPLES: &str = "\
Examples:
  # check target against thresholds
  check_graphite -u http://localhost:8080 -t collectd.host1.memory.percent-used -c 90 -w 80

  # calculate percentage in pairs of targets and check percentage against thresholds
  check_graphite -u http://localhost:8080 \\
    -t collectd.host1.GenericJMX-app1_memory-heap.memory-{used,max} \\
    -t collectd.host1.GenericJMX-app1_memory_pool-CMS_Perm_Gen.memory-{used,max} \\
    -p -c 42 -w 2 -r 'memory[^-]*-(.*)$'

  # check sum of targets against thresholds
  check_graphite -u http://localhost:8080 \\
    -t collectd.host1.aggregation-cpu-average.cpu-{system,user} -w 70 -c 90 -s --name cpu-usage";

/// Build the command line interface of the probe
pub fn build_cli() -> Command {
    Command::new("check_graphite")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Check graphite targets against warning and critical thresholds")
        .after_help(EXAMPLES)
        .arg(
            Arg::new("graphite-url")
                .short('u')
                .long("graphite-url")
                .value_name("URL")
                .help("Graphite url")
                .required(true),
        )
        .arg(
            Arg::new("target")
                .short('t')
                .long("target")
                .value_name("TARGET")
                .help("Comma-separated list of targets to check, may be repeated")
                .action(ArgAction::Append)
                .value_delimiter(',')
                .required(true),
        )
        .arg(
            Arg::new("from")
                .short('f')
                .long("from")
                .help("Set from")
                .allow_hyphen_values(true)
                .default_value("-2min"),
        )
        .arg(
            Arg::new("until")
                .long("until")
                .help("Set until")
                .allow_hyphen_values(true)
                .default_value("now"),
        )
        .arg(
            Arg::new("timeout")
                .long("timeout")
                .value_name("SECONDS")
                .help("Timeout for the graphite request")
                .value_parser(clap::value_parser!(u64))
                .default_value("10"),
        )
        .arg(
            Arg::new("warning")
                .short('w')
                .long("warning")
                .help("Set warning threshold")
                .value_parser(clap::value_parser!(f64))
                .allow_negative_numbers(true),
        )
        .arg(
            Arg::new("critical")
                .short('c')
                .long("critical")
                .help("Set critical threshold")
                .value_parser(clap::value_parser!(f64))
                .allow_negative_numbers(true),
        )
        .arg(
            Arg::new("max")
                .short('m')
                .long("max")
                .help("Maximum value for target")
                .value_parser(clap::value_parser!(f64))
                .allow_negative_numbers(true),
        )
        .arg(
            Arg::new("summarize")
                .short('s')
                .long("summarize")
                .help("Summarize target datapoints and check against thresholds")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("percentage")
                .short('p')
                .long("percentage")
                .help("Calculate percentage and check against thresholds, uses --max or every second target as max for previous target")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("empty-ok")
                .long("empty-ok")
                .help("Empty data from graphite is ok")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("name")
                .long("name")
                .help("Set name to use in message and perfdata for target"),
        )
        .arg(
            Arg::new("target-name-regexp")
                .short('r')
                .long("target-name-regexp")
                .value_name("REGEX")
                .help("Regex to show only the part of the target name, which matches"),
        )
        .arg(
            Arg::new("perfdata")
                .long("perfdata")
                .help("Show perfdata")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("debug")
                .short('d')
                .long("debug")
                .help("Set debug mode")
                .action(ArgAction::SetTrue),
        )
}
